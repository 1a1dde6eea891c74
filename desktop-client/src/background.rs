use std::io::Read;

use rand::Rng;

use crate::state::BackgroundImage;

/// The classic rotation of snake photos the game cycles through.
pub const BACKGROUND_IMAGE_URLS: [&str; 5] = [
    "https://cdn.pixabay.com/photo/2015/02/28/15/25/snake-653639_960_720.jpg",
    "https://cdn.pixabay.com/photo/2016/08/31/18/19/snake-1634293_960_720.jpg",
    "https://cdn.pixabay.com/photo/2014/11/23/21/22/green-tree-python-543243_960_720.jpg",
    "https://cdn.pixabay.com/photo/2015/10/30/15/04/green-tree-python-1014229_960_720.jpg",
    "https://cdn.pixabay.com/photo/2019/02/06/17/09/snake-3979601_960_720.jpg",
];

pub fn pick_background_url() -> &'static str {
    let mut rng = rand::rng();
    BACKGROUND_IMAGE_URLS[rng.random_range(0..BACKGROUND_IMAGE_URLS.len())]
}

/// Downloads and decodes one background image. Blocking; run it on a
/// blocking task, never on the game loop.
pub fn fetch_background(url: &str, generation: u64) -> Result<BackgroundImage, String> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| format!("Request to {} failed: {}", url, e))?;

    let mut bytes: Vec<u8> = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok(BackgroundImage {
        pixels: image.into_raw(),
        width: width as usize,
        height: height as usize,
        generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picked_url_is_from_the_fixed_list() {
        for _ in 0..20 {
            let url = pick_background_url();
            assert!(BACKGROUND_IMAGE_URLS.contains(&url));
        }
    }

    #[test]
    fn test_fetch_rejects_unreachable_url() {
        let result = fetch_background("http://127.0.0.1:9/nothing.jpg", 0);
        assert!(result.is_err());
    }
}
