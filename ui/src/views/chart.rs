#![allow(non_snake_case)]

use dioxus::prelude::*;
use report_common::chart::layout_bars;

const CHART_WIDTH: f32 = 560.0;
const CHART_HEIGHT: f32 = 240.0;

/// Bar chart of dispatches per status. Geometry comes precomputed from
/// `report_common::chart`; this component only emits the SVG.
#[component]
pub fn StatusChart(data: Vec<(String, u32)>) -> Element {
    let layout = layout_bars(&data, CHART_WIDTH, CHART_HEIGHT);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let label_y = layout.plot_bottom + 16.0;

    rsx! {
        svg {
            class: "status-chart",
            view_box: "{view_box}",
            role: "img",

            for tick in layout.ticks.iter() {
                {
                    let text_x = layout.plot_left - 6.0;
                    let text_y = tick.y + 4.0;
                    rsx! {
                        line {
                            x1: layout.plot_left as f64,
                            y1: tick.y as f64,
                            x2: layout.plot_right as f64,
                            y2: tick.y as f64,
                            class: "chart-grid",
                        }
                        text {
                            x: text_x as f64,
                            y: text_y as f64,
                            text_anchor: "end",
                            class: "chart-tick",
                            "{tick.value}"
                        }
                    }
                }
            }

            for bar in layout.bars.iter() {
                {
                    let center_x = bar.x + bar.width / 2.0;
                    let value_y = bar.y - 4.0;
                    rsx! {
                        rect {
                            x: bar.x as f64,
                            y: bar.y as f64,
                            width: bar.width as f64,
                            height: bar.height as f64,
                            class: "chart-bar",
                        }
                        text {
                            x: center_x as f64,
                            y: value_y as f64,
                            text_anchor: "middle",
                            class: "chart-value",
                            "{bar.value}"
                        }
                        text {
                            x: center_x as f64,
                            y: label_y as f64,
                            text_anchor: "middle",
                            class: "chart-label",
                            "{bar.label}"
                        }
                    }
                }
            }
        }
    }
}
