use dropstage::config::load_page_config;
use dropstage::init_drop_zone_from_document;

fn main() {
    console_error_panic_hook::set_once();

    let config = load_page_config();
    match init_drop_zone_from_document(&config) {
        Ok(zone) => zone.forget(),
        Err(e) => web_sys::console::error_1(&format!("dropstage: {}", e).into()),
    }
}
