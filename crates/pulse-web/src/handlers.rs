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

use actix_web::{HttpResponse, web};
use tracing::{error, info};

use crate::dto::{HealthResponse, MentionsQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /mentions - aggregated mentions, sorted
pub async fn mentions(
  state: web::Data<AppState>,
  query: web::Query<MentionsQuery>,
) -> Result<HttpResponse, ApiError> {
  let (key, ascending) = query.ordering()?;

  let records = state.service.mentions(key, ascending).await.map_err(|e| {
    error!("Mention scan failed: {}", e);
    ApiError::from(e)
  })?;

  info!(records = records.len(), sort = %key, ascending, "Serving mentions");
  Ok(HttpResponse::Ok().json(records))
}

/// GET /health - liveness check
pub async fn health() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    status: "ok".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  })
}
