use leptos::*;

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

const DONUT_SIZE: f64 = 160.0;
const DONUT_OUTER: f64 = 72.0;
const DONUT_INNER: f64 = 44.0;

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path of one annular sector from `a0` to `a1` (radians, clockwise
/// from 12 o'clock).
fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, a0: f64, a1: f64) -> String {
    let large = if a1 - a0 > std::f64::consts::PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, a0);
    let (x1, y1) = polar(cx, cy, outer, a1);
    let (x2, y2) = polar(cx, cy, inner, a1);
    let (x3, y3) = polar(cx, cy, inner, a0);
    format!(
        "M {x0:.3} {y0:.3} A {outer:.3} {outer:.3} 0 {large} 1 {x1:.3} {y1:.3} \
         L {x2:.3} {y2:.3} A {inner:.3} {inner:.3} 0 {large} 0 {x3:.3} {y3:.3} Z"
    )
}

/// Annular sector paths for the non-zero slices, in series order. Empty
/// when the series sums to zero. A sweep never reaches a full turn so the
/// arc endpoints stay distinct.
pub fn donut_paths(slices: &[Slice]) -> Vec<(String, &'static str)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let full_turn = std::f64::consts::TAU;
    let max_sweep = full_turn - 1e-4;
    let cx = DONUT_SIZE / 2.0;
    let cy = DONUT_SIZE / 2.0;
    let mut angle = -std::f64::consts::FRAC_PI_2;
    let mut paths = Vec::new();
    for slice in slices {
        let value = slice.value.max(0.0);
        if value == 0.0 {
            continue;
        }
        let sweep = (value / total * full_turn).min(max_sweep);
        paths.push((
            arc_path(cx, cy, DONUT_OUTER, DONUT_INNER, angle, angle + sweep),
            slice.color,
        ));
        angle += sweep;
    }
    paths
}

/// Bar heights in pixels, scaled so the largest value fills `max_px`.
pub fn scaled_heights(values: &[f64], max_px: f64) -> Vec<f64> {
    let peak = values.iter().cloned().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v.max(0.0) / peak * max_px * 1000.0).round() / 1000.0)
        .collect()
}

#[component]
fn ChartLegend(slices: Vec<Slice>) -> impl IntoView {
    view! {
        <ul class="mt-3 space-y-1 text-xs text-fg-muted">
            <For
                each=move || slices.clone()
                key=|slice| slice.label.clone()
                children=move |slice: Slice| {
                    view! {
                        <li class="flex items-center gap-2">
                            <span
                                class="inline-block h-2.5 w-2.5 rounded-sm"
                                style=format!("background-color: {}", slice.color)
                            ></span>
                            <span>{slice.label.clone()}</span>
                            <span class="ml-auto text-fg">{format!("{:.2}", slice.value)}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn DonutChart(#[prop(into)] title: String, slices: Vec<Slice>) -> impl IntoView {
    let paths = donut_paths(&slices);
    let empty = paths.is_empty();
    let center = DONUT_SIZE / 2.0;
    let ring_radius = (DONUT_OUTER + DONUT_INNER) / 2.0;
    let ring_width = DONUT_OUTER - DONUT_INNER;
    view! {
        <div class="flex flex-col items-center">
            <h4 class="text-sm font-semibold text-fg">{title}</h4>
            <svg
                viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")
                class="mt-2 h-40 w-40"
                role="img"
            >
                <Show when=move || empty>
                    <circle
                        cx=center
                        cy=center
                        r=ring_radius
                        fill="none"
                        stroke="#e5e7eb"
                        stroke-width=ring_width
                    ></circle>
                </Show>
                {paths
                    .into_iter()
                    .map(|(d, color)| view! { <path d=d fill=color></path> })
                    .collect_view()}
            </svg>
            <ChartLegend slices=slices />
        </div>
    }
}

const BAR_HEIGHT: f64 = 120.0;
const BAR_WIDTH: f64 = 36.0;
const BAR_GAP: f64 = 18.0;

#[component]
pub fn BarChart(#[prop(into)] title: String, bars: Vec<Slice>) -> impl IntoView {
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let heights = scaled_heights(&values, BAR_HEIGHT);
    let width = bars.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let rects = bars
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(i, (bar, height))| {
            let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
            let y = BAR_HEIGHT - height;
            let height = *height;
            view! {
                <rect x=x y=y width=BAR_WIDTH height=height fill=bar.color rx="3"></rect>
            }
        })
        .collect_view();
    view! {
        <div class="flex flex-col items-center">
            <h4 class="text-sm font-semibold text-fg">{title}</h4>
            <svg
                viewBox=format!("0 0 {width} {BAR_HEIGHT}")
                class="mt-2 h-32"
                style=format!("width: {width}px")
                role="img"
            >
                {rects}
            </svg>
            <ChartLegend slices=bars />
        </div>
    }
}
