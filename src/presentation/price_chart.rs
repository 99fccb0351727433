use leptos::html::Canvas;
use leptos::*;

use crate::config::AppConfig;
use crate::domain::chart::{PriceSeries, SeriesKind};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::CanvasRenderer;
use crate::log_error;
use crate::time_utils::{format_date, format_price};

/// Canvas line chart of one price series with a hover tooltip.
#[component]
pub fn PriceChart(
    #[prop(into)] refined: MaybeSignal<PriceSeries>,
    #[prop(into, optional)] keys: MaybeSignal<PriceSeries>,
    #[prop(optional)] selected: SeriesKind,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let renderer = store_value(CanvasRenderer::new(config.chart_width, config.chart_height, selected));
    let canvas_ref = create_node_ref::<Canvas>();
    let hovered = create_rw_signal::<Option<usize>>(None);

    let series = create_memo(move |_| match selected {
        SeriesKind::Refined => refined.get(),
        SeriesKind::Keys => keys.get(),
    });

    // redraw on data, hover or mount
    create_effect(move |_| {
        let highlight = hovered.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        series.with(|series| {
            renderer.with_value(|renderer| {
                if let Err(err) = renderer.render_chart(&canvas, series, highlight) {
                    log_error!(LogComponent::Presentation("PriceChart"), "{}", err);
                }
            })
        });
    });

    let on_mouse_move = move |event: web_sys::MouseEvent| {
        let rendered_width = canvas_ref.get_untracked().map_or(0.0, |canvas| canvas.client_width() as f64);
        let index = series.with(|series| {
            renderer.with_value(|renderer| {
                let layout = renderer.layout();
                layout.nearest_index(series, layout.canvas_x(event.offset_x() as f64, rendered_width))
            })
        });
        hovered.set(index);
    };

    let tooltip = move || {
        let index = hovered.get()?;
        let point = series.with(|series| series.points().get(index).copied())?;
        Some(format!(
            "{} · {}",
            format_date(point.timestamp.value()),
            format_price(point.value.value(), selected.unit())
        ))
    };

    view! {
        <div class="price-chart">
            <canvas
                node_ref=canvas_ref
                width=config.chart_width.to_string()
                height=config.chart_height.to_string()
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| hovered.set(None)
            />
            <div
                class="chart-tooltip"
                style:display=move || if hovered.get().is_some() { "block" } else { "none" }
            >
                {tooltip}
            </div>
        </div>
    }
}
