//! Extractors whose rejections render as [`ServerError`] JSON bodies.

use crate::error::ServerError;
use axum::extract::{FromRequest, FromRequestParts};

/// `axum::Json` with a 400 `BAD_REQUEST` body on malformed input.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with a 400 `BAD_REQUEST` body on malformed input.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ServerError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServerError))]
pub struct ApiPath<T>(pub T);
