use crate::dispatcher::{HandlerResponse, CONTENT_TYPE_JSON};
use may_minihttp::Response;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "",
    }
}

fn content_type_header(content_type: &str) -> &'static str {
    if content_type == CONTENT_TYPE_JSON {
        "Content-Type: application/json"
    } else {
        "Content-Type: text/plain"
    }
}

pub fn write_handler_response(res: &mut Response, response: HandlerResponse) {
    res.status_code(response.status as usize, status_reason(response.status));
    res.header(content_type_header(response.content_type));
    res.body_vec(response.body);
}
