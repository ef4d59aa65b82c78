use std::io::ErrorKind;

use actix_files::NamedFile;
use actix_web::get;
use actix_web::web::Data;

use crate::config::Config;
use crate::error::Error;

// Page routes serve the template files as-is; there is no server-side
// data binding, the pages fetch everything through the JSON API.

fn template(config: &Config, name: &str) -> Result<NamedFile, Error> {
    NamedFile::open(config.template_dir.join(name)).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::PathNotFound,
        _ => Error::IoError(err),
    })
}

#[get("/")]
async fn index(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "index.html")
}

#[get("/home")]
async fn home(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "home.html")
}

#[get("/campaigns")]
async fn campaigns(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "campaigns.html")
}

#[get("/devices")]
async fn devices(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "devices.html")
}

#[get("/analytics")]
async fn analytics(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "analytics.html")
}

#[get("/earnings")]
async fn earnings(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "earnings.html")
}

#[get("/microtisers")]
async fn microtisers(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "microtisers.html")
}

#[get("/advertisers")]
async fn advertisers(config: Data<Config>) -> Result<NamedFile, Error> {
    template(&config, "advertisers.html")
}
