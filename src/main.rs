//! NummiNews Frontend Entry Point

mod app;
mod components;
mod context;
mod intro;
mod store;
mod style;
mod ticker;
mod weather;

use app::{App, ContentErrorPanel};
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use nummi_content::ContentCollection;
use wasm_bindgen::JsCast;

/// Id of the host document's container element
const MOUNT_ID: &str = "root";

/// Console verbosity: debug builds log everything down to `debug!`
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn mount_target() -> Option<web_sys::HtmlElement> {
    document()
        .get_element_by_id(MOUNT_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(console_level()) {
        web_sys::console::warn_1(&format!("[APP] console logger not installed: {}", err).into());
    }

    let content = ContentCollection::from_json(
        include_str!("../content/articles.json"),
        include_str!("../content/site.json"),
    )
    .inspect_err(|err| log::error!("[APP] content failed to load: {}", err));

    let root = move || match content {
        Ok(content) => view! { <App content=content /> }.into_any(),
        Err(err) => view! { <ContentErrorPanel message=err.to_string() /> }.into_any(),
    };

    match mount_target() {
        Some(target) => {
            log::debug!("[APP] mounting into #{}", MOUNT_ID);
            mount_to(target, root).forget();
        }
        None => {
            log::warn!("[APP] #{} not found, mounting to body", MOUNT_ID);
            mount_to_body(root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_keeps_lifecycle_info() {
        assert!(console_level() >= log::Level::Info);
        if cfg!(debug_assertions) {
            assert_eq!(console_level(), log::Level::Debug);
        }
    }
}
