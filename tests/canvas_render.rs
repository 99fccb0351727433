#![cfg(target_arch = "wasm32")]

use item_price_tracker::domain::chart::{ChartPoint, PriceSeries, SeriesKind};
use item_price_tracker::infrastructure::rendering::CanvasRenderer;
use item_price_tracker::presentation::PriceChart;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn sample_series() -> PriceSeries {
    PriceSeries::new(vec![
        ChartPoint::new(1_700_000_000, 12.33),
        ChartPoint::new(1_700_086_400, 12.66),
        ChartPoint::new(1_700_172_800, 13.0),
    ])
}

#[wasm_bindgen_test]
fn renders_series_and_sizes_canvas() {
    let canvas = canvas();
    let renderer = CanvasRenderer::new(640, 320, SeriesKind::Refined);

    renderer.render_chart(&canvas, &sample_series(), Some(1)).unwrap();

    assert_eq!(canvas.width(), 640);
    assert_eq!(canvas.height(), 320);
    canvas.remove();
}

#[wasm_bindgen_test]
fn renders_empty_series() {
    let canvas = canvas();
    let renderer = CanvasRenderer::new(320, 160, SeriesKind::Keys);

    assert!(renderer.render_chart(&canvas, &PriceSeries::default(), None).is_ok());
    canvas.remove();
}

#[wasm_bindgen_test]
fn price_chart_component_mounts_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let series = sample_series();
    mount_to(root.clone(), move || view! { <PriceChart refined=series.clone()/> });

    assert!(root.query_selector(".price-chart canvas").unwrap().is_some());
    root.remove();
}
