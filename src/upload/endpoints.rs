use actix_multipart::Multipart;
use actix_web::post;
use actix_web::web::{Data, Json, Path};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::auth::AuthenticatedUser;
use crate::campaign::CampaignId;
use crate::config::Config;
use crate::error::Error;

use super::thumbnail;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UploadBody {
    pub message: String,
    pub filename: String,
}

#[post("/api/campaigns/{campaign_id}/upload")]
#[tracing::instrument(skip(config, payload))]
async fn upload_campaign_video(
    config: Data<Config>,
    user: AuthenticatedUser,
    params: Path<CampaignId>,
    mut payload: Multipart,
) -> Result<Json<UploadBody>, Error> {
    // The campaign id is accepted for route compatibility but the
    // upload is not associated with the campaign record.
    let _campaign_id = params.into_inner();

    while let Some(mut field) = payload.try_next().await? {
        if field.name() != "video" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .map(ToString::to_string)
            .unwrap_or_default();
        if filename.is_empty() {
            return Err(Error::MissingFilename);
        }

        let extension = super::extension(&filename).unwrap_or_default();
        if !super::is_allowed(&extension) {
            return Err(Error::InvalidFileType { extension });
        }

        let unique = super::unique_filename(&filename);
        let video_path = config.video_dir.join(&unique);

        // A failure mid-stream leaves a partial file behind; there is
        // no cleanup pass in this surface.
        let mut file = File::create(&video_path).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = field.try_next().await? {
            written += chunk.len() as u64;
            if written > config.max_upload_bytes {
                return Err(Error::FileTooLarge {
                    limit_bytes: config.max_upload_bytes,
                });
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        let thumbnail_path = config.thumbnail_dir.join(format!("{}.jpg", unique));
        if let Err(err) = thumbnail::generate(&thumbnail_path) {
            warn!("failed to generate thumbnail: {}", err);
        }

        return Ok(Json(UploadBody {
            message: "Video uploaded successfully".to_string(),
            filename: unique,
        }));
    }

    Err(Error::MissingVideoFile)
}
