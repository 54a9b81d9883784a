use std::io::Cursor;
use tiny_http::Response;

use petalset::viewer::encode_png;

use crate::state::SharedState;

/// `GET /samples/{index}.png`
///
/// Serves one stored sample, converted to RGB, as a PNG.
pub fn handle_get(index: &str, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let index: usize = match index.parse() {
        Ok(i)  => i,
        Err(_) => return crate::routes::not_found(),
    };

    let st  = state.lock().unwrap();
    let img = st.dataset.display_image(index);
    drop(st);

    let img = match img {
        Some(img) => img,
        None      => return crate::routes::not_found(),
    };

    match encode_png(&img) {
        Ok(bytes) => crate::routes::png_response(bytes),
        Err(e) => {
            log::error!("Failed to encode sample {}: {}", index, e);
            crate::routes::server_error(&e.to_string())
        }
    }
}
