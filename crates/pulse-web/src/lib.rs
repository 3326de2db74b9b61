/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Read-only HTTP API over the mention pipeline.

mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{HealthResponse, MentionsQuery};
pub use error::ApiError;
pub use state::AppState;

use actix_web::{App, HttpServer, middleware, web};
use tracing::info;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Register routes and extractor config on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::QueryConfig::default().error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()))
    .route("/mentions", web::get().to(handlers::mentions))
    .route("/health", web::get().to(handlers::health));
}

/// Serve the API until the server is stopped
pub async fn serve(state: AppState, bind_addr: &str) -> std::io::Result<()> {
  let data = web::Data::new(state);
  info!("Listening on http://{}", bind_addr);

  HttpServer::new(move || {
    App::new().app_data(data.clone()).wrap(middleware::Logger::default()).configure(configure)
  })
  .bind(bind_addr)?
  .run()
  .await
}
