use axum::{
    body::Body,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub struct HtmlResponse<T>
where
    T: Send,
    Body: From<T>,
{
    data: T,
    status: StatusCode,
}

impl<T> HtmlResponse<T>
where
    T: Send,
    Body: From<T>,
{
    pub fn new(data: T) -> Self {
        Self {
            data,
            status: StatusCode::OK,
        }
    }
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T> IntoResponse for HtmlResponse<T>
where
    T: Send,
    Body: From<T>,
{
    fn into_response(self) -> Response {
        (self.status, Html(Body::from(self.data))).into_response()
    }
}
