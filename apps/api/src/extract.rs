use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` extractor whose rejections use the API error envelope instead of axum's plain text.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
