//! Request extractors with rejections mapped onto `AppError`.

pub mod json;
