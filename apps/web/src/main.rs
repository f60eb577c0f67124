mod dom;

use std::rc::Rc;

use dom::{DomSurface, TooltipHover};
use election_bubbles_core::{render_chart, ChartConfig, Record};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

const DATA_URL: &str = "./data.json";

fn main() {
    spawn_local(fetch_and_render());
}

async fn fetch_and_render() {
    let Some(records) = fetch_records().await else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let hover = Rc::new(TooltipHover::new(&document));
    let mut surface = match DomSurface::attach(document) {
        Ok(surface) => surface,
        Err(error) => {
            web_sys::console::error_2(&"Error creating bubble chart:".into(), &error);
            return;
        }
    };

    match render_chart(&records, &ChartConfig::default(), &mut surface, hover) {
        Ok(scene) => {
            for diagnostic in &scene.diagnostics {
                web_sys::console::warn_1(
                    &format!("{}: {}", diagnostic.area, diagnostic.message).into(),
                );
            }
        }
        Err(error) => {
            web_sys::console::error_2(&"Error creating bubble chart:".into(), &error);
        }
    }
}

/// One GET of the dataset; every failure is logged and yields `None`.
async fn fetch_records() -> Option<Vec<Record>> {
    let window = web_sys::window()?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init(DATA_URL, &opts) else {
        web_sys::console::error_1(&"Failed to build data.json request".into());
        return None;
    };

    let response_value =
        match wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await {
            Ok(value) => value,
            Err(error) => {
                web_sys::console::error_2(&"Error fetching or processing data:".into(), &error);
                return None;
            }
        };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return None;
    };

    let Ok(body) = response.json() else {
        web_sys::console::error_1(&"Failed to read data.json body".into());
        return None;
    };

    let json = match wasm_bindgen_futures::JsFuture::from(body).await {
        Ok(json) => json,
        Err(error) => {
            web_sys::console::error_2(&"Error fetching or processing data:".into(), &error);
            return None;
        }
    };

    match serde_wasm_bindgen::from_value::<Vec<Record>>(json) {
        Ok(records) => Some(records),
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse data.json: {error}").into());
            None
        }
    }
}
