//! Geometry for the status bar chart, kept free of rendering concerns so
//! the layout math can be tested natively. The view only turns these
//! rectangles into SVG.

/// Computed chart geometry in SVG user units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
    pub plot_left: f32,
    pub plot_right: f32,
    pub plot_top: f32,
    pub plot_bottom: f32,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    pub value: u32,
}

/// Horizontal gridline of the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub y: f32,
    pub value: u32,
}

const MARGIN_LEFT: f32 = 42.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 28.0;
const BAR_FILL_RATIO: f32 = 0.6;
const TARGET_TICKS: u32 = 4;

/// Smallest step of the form {1, 2, 5}·10^k that splits `max` into at
/// most `target_ticks` intervals.
pub fn nice_step(max: u32, target_ticks: u32) -> u32 {
    let target = u64::from(target_ticks.max(1));
    let raw = u64::from(max).div_ceil(target).max(1);
    let mut magnitude: u64 = 1;
    loop {
        for mult in [1u64, 2, 5] {
            let step = mult * magnitude;
            if step >= raw {
                return step.min(u64::from(u32::MAX)) as u32;
            }
        }
        magnitude *= 10;
    }
}

/// Lays out one bar per `(label, value)` pair inside a `width`×`height`
/// viewport. Empty data yields an empty layout.
pub fn layout_bars(data: &[(String, u32)], width: f32, height: f32) -> ChartLayout {
    let plot_left = MARGIN_LEFT;
    let plot_right = (width - MARGIN_RIGHT).max(plot_left);
    let plot_top = MARGIN_TOP;
    let plot_bottom = (height - MARGIN_BOTTOM).max(plot_top);

    let mut layout = ChartLayout {
        plot_left,
        plot_right,
        plot_top,
        plot_bottom,
        bars: Vec::new(),
        ticks: Vec::new(),
    };
    if data.is_empty() {
        return layout;
    }

    let max = data.iter().map(|(_, value)| *value).max().unwrap_or(0);
    let step = nice_step(max, TARGET_TICKS);
    let axis_max = (u64::from(step) * u64::from(max).div_ceil(u64::from(step)).max(1))
        .min(u64::from(u32::MAX)) as u32;

    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;

    let mut value: u64 = 0;
    while value <= u64::from(axis_max) {
        let y = plot_bottom - (value as f32 / axis_max as f32) * plot_height;
        layout.ticks.push(Tick {
            y,
            value: value as u32,
        });
        value += u64::from(step);
    }

    let slot = plot_width / data.len() as f32;
    let bar_width = slot * BAR_FILL_RATIO;
    for (i, (label, value)) in data.iter().enumerate() {
        let bar_height = (*value as f32 / axis_max as f32) * plot_height;
        let x = plot_left + slot * i as f32 + (slot - bar_width) / 2.0;
        layout.bars.push(Bar {
            x,
            y: plot_bottom - bar_height,
            width: bar_width,
            height: bar_height,
            label: label.clone(),
            value: *value,
        });
    }
    layout
}
