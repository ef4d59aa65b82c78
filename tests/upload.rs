use std::path::PathBuf;
use std::time::Duration;

use awc::Client;

use adboard_server::upload::UploadBody;
use adboard_server::{Config, LoginBody, TokenBody};

const BOUNDARY: &str = "----adboard-test-boundary";

fn test_config(port: u16) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port,
        video_dir: std::env::temp_dir().join(format!("adboard-test-videos-{}", port)),
        thumbnail_dir: std::env::temp_dir().join(format!("adboard-test-thumbnails-{}", port)),
        ..Config::default()
    }
}

async fn start_server(config: Config) -> (Client, PathBuf, PathBuf) {
    let port = config.port;
    let video_dir = config.video_dir.clone();
    let thumbnail_dir = config.thumbnail_dir.clone();
    let _ = std::fs::remove_dir_all(&video_dir);
    let _ = std::fs::remove_dir_all(&thumbnail_dir);
    let _ = std::thread::spawn(move || {
        let _ = adboard_server::run(config, false);
    });

    let client = Client::default();
    for _ in 0..50 {
        if let Ok(response) = client
            .get(format!("http://127.0.0.1:{}/health", port))
            .send()
            .await
        {
            if response.status().is_success() {
                return (client, video_dir, thumbnail_dir);
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("server did not come up on port {}", port);
}

async fn login(client: &Client, port: u16) -> String {
    let body = LoginBody {
        username: "tester".to_string(),
        password: "hunter2".to_string(),
    };
    let token: TokenBody = client
        .post(format!("http://127.0.0.1:{}/api/auth/login", port))
        .send_json(&body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    token.token
}

fn multipart_body(filename: &str, contents: &str) -> String {
    format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"video\"; filename=\"{filename}\"\r\n\
         Content-Type: video/mp4\r\n\
         \r\n\
         {contents}\r\n\
         --{boundary}--\r\n",
        boundary = BOUNDARY,
        filename = filename,
        contents = contents,
    )
}

#[actix_rt::test]
async fn upload_writes_video_and_thumbnail() {
    let port = 18131;
    let (client, video_dir, thumbnail_dir) = start_server(test_config(port)).await;
    let token = login(&client, port).await;

    let mut response = client
        .post(format!("http://127.0.0.1:{}/api/campaigns/1/upload", port))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .content_type(format!("multipart/form-data; boundary={}", BOUNDARY))
        .send_body(multipart_body("clip.mp4", "not actually video bytes"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: UploadBody = response.json().await.unwrap();
    assert!(body.filename.ends_with("_clip.mp4"));

    let video_path = video_dir.join(&body.filename);
    assert!(video_path.exists(), "video file should be written");

    let thumbnail_path = thumbnail_dir.join(format!("{}.jpg", body.filename));
    assert!(thumbnail_path.exists(), "thumbnail should be written");

    let thumbnail = image::open(&thumbnail_path).unwrap();
    assert_eq!(thumbnail.width(), 320);
    assert_eq!(thumbnail.height(), 180);
}

#[actix_rt::test]
async fn upload_rejects_disallowed_extensions() {
    let port = 18132;
    let (client, video_dir, _) = start_server(test_config(port)).await;
    let token = login(&client, port).await;

    let response = client
        .post(format!("http://127.0.0.1:{}/api/campaigns/1/upload", port))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .content_type(format!("multipart/form-data; boundary={}", BOUNDARY))
        .send_body(multipart_body("payload.exe", "mz"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);

    let written: Vec<_> = std::fs::read_dir(&video_dir).unwrap().collect();
    assert!(written.is_empty(), "no file should be written");
}

#[actix_rt::test]
async fn upload_requires_a_video_field() {
    let port = 18133;
    let (client, _, _) = start_server(test_config(port)).await;
    let token = login(&client, port).await;

    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"other\"; filename=\"clip.mp4\"\r\n\
         \r\n\
         data\r\n\
         --{boundary}--\r\n",
        boundary = BOUNDARY,
    );

    let response = client
        .post(format!("http://127.0.0.1:{}/api/campaigns/1/upload", port))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .content_type(format!("multipart/form-data; boundary={}", BOUNDARY))
        .send_body(body)
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[actix_rt::test]
async fn upload_rejects_files_over_the_size_limit() {
    let port = 18134;
    let config = Config {
        max_upload_bytes: 16,
        ..test_config(port)
    };
    let (client, video_dir, thumbnail_dir) = start_server(config).await;
    let token = login(&client, port).await;

    let mut response = client
        .post(format!("http://127.0.0.1:{}/api/campaigns/1/upload", port))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .content_type(format!("multipart/form-data; boundary={}", BOUNDARY))
        .send_body(multipart_body(
            "clip.mp4",
            "well over sixteen bytes of video data",
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 413);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error_code"], "E4131000");

    // The stream is cut off mid-write; a partial file staying behind
    // is accepted behavior.
    let written: Vec<_> = std::fs::read_dir(&video_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("_clip.mp4"));

    let thumbnails: Vec<_> = std::fs::read_dir(&thumbnail_dir).unwrap().collect();
    assert!(thumbnails.is_empty(), "no thumbnail for a rejected upload");
}

#[actix_rt::test]
async fn upload_rejects_an_empty_filename() {
    let port = 18135;
    let (client, video_dir, _) = start_server(test_config(port)).await;
    let token = login(&client, port).await;

    let mut response = client
        .post(format!("http://127.0.0.1:{}/api/campaigns/1/upload", port))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .content_type(format!("multipart/form-data; boundary={}", BOUNDARY))
        .send_body(multipart_body("", "data"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error_code"], "E4001005");

    let written: Vec<_> = std::fs::read_dir(&video_dir).unwrap().collect();
    assert!(written.is_empty(), "no file should be written");
}
