use slotdoors_engine::{DoorId, Motion, RenderTarget};
use slotdoors_web::dom;
use slotdoors_web::target::DomRenderTarget;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_doors_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("doors") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create doors root");
    root.set_id("doors");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append doors root");
    root
}

#[wasm_bindgen_test]
fn create_door_appends_addressable_elements() {
    let root = ensure_doors_root();
    let mut target = DomRenderTarget::mount(root, 105.0);
    target.create_door(0);
    target.create_door(1);

    let doc = dom::document();
    assert!(doc.get_element_by_id("door-0").is_some());
    assert!(doc.get_element_by_id("door-1").is_some());
}

#[wasm_bindgen_test]
fn set_boxes_renders_fixed_height_boxes() {
    let root = ensure_doors_root();
    let mut target = DomRenderTarget::mount(root, 105.0);
    let door = target.create_door(0);
    let symbols = vec!["cherry".to_string(), "lemon".to_string()];
    target.set_boxes(door, &symbols);

    let doc = dom::document();
    let boxes = doc
        .query_selector_all("#door-0 .box")
        .expect("query boxes");
    assert_eq!(boxes.length(), 2);
}

#[wasm_bindgen_test]
fn instant_offset_lands_without_transition() {
    let root = ensure_doors_root();
    let mut target = DomRenderTarget::mount(root, 105.0);
    let door = target.create_door(0);
    target.set_offset(door, -1522.5, Motion::Instant);

    let doc = dom::document();
    let container = doc
        .query_selector("#door-0 .boxcontainer")
        .expect("query container")
        .expect("container exists");
    let style = container.get_attribute("style").unwrap_or_default();
    assert!(style.contains("translateY(-1522.5px)"));
}

#[wasm_bindgen_test]
fn unknown_door_id_is_reported_not_panicked() {
    let root = ensure_doors_root();
    let mut target = DomRenderTarget::mount(root, 105.0);
    target.set_blur(DoorId(9), true);
}
