use yew::prelude::*;

use crate::model::ChartKind;

#[derive(Properties, PartialEq)]
pub struct WeekChartProps {
    /// Per-day `(day-of-month, amount)` pairs for one week bucket.
    pub series: Vec<(u32, i64)>,
    pub kind: ChartKind,
}

const WIDTH: f64 = 280.0;
const PLOT_HEIGHT: f64 = 120.0;
const HEIGHT: f64 = 150.0;

const PALETTE: [&str; 7] = [
    "#4bc0c0", "#36a2eb", "#9966ff", "#ff9f40", "#ff6384", "#ffcd56", "#c9cbcf",
];

/// Bar heights scaled to the tallest value of the week. An all-zero
/// week yields all-zero heights.
fn bar_heights(series: &[(u32, i64)], plot_height: f64) -> Vec<f64> {
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    if max <= 0 {
        return vec![0.0; series.len()];
    }
    series
        .iter()
        .map(|(_, v)| (*v).max(0) as f64 / max as f64 * plot_height)
        .collect()
}

struct PieSegment {
    day: u32,
    color: &'static str,
    /// Fraction of the full turn where the segment starts.
    start: f64,
    /// Fraction of the full turn the segment spans.
    len: f64,
}

fn pie_segments(series: &[(u32, i64)]) -> Vec<PieSegment> {
    let total: i64 = series.iter().map(|(_, v)| (*v).max(0)).sum();
    if total <= 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    series
        .iter()
        .enumerate()
        .filter(|(_, (_, v))| *v > 0)
        .map(|(i, (day, v))| {
            let len = *v as f64 / total as f64;
            let segment = PieSegment {
                day: *day,
                color: PALETTE[i % PALETTE.len()],
                start,
                len,
            };
            start += len;
            segment
        })
        .collect()
}

/// SVG stand-in for the chart-library bar/pie/doughnut charts. The
/// geometry is recomputed from props on every render; Yew diffs the
/// existing SVG nodes in place, so data changes do not flash.
#[function_component(WeekChart)]
pub fn week_chart(props: &WeekChartProps) -> Html {
    match props.kind {
        ChartKind::Bar => render_bar(&props.series),
        ChartKind::Pie => render_round(&props.series, 44.0),
        ChartKind::Doughnut => render_round(&props.series, 16.0),
    }
}

fn render_bar(series: &[(u32, i64)]) -> Html {
    let heights = bar_heights(series, PLOT_HEIGHT);
    let slot = WIDTH / series.len().max(1) as f64;
    let bar_width = slot * 0.6;

    html! {
        <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full" role="img">
            <line x1="0" y1={PLOT_HEIGHT.to_string()} x2={WIDTH.to_string()} y2={PLOT_HEIGHT.to_string()} stroke="#e2e8f0" stroke-width="1" />
            { for series.iter().zip(heights.iter()).enumerate().map(|(i, ((day, amount), h))| {
                let x = i as f64 * slot + (slot - bar_width) / 2.0;
                let y = PLOT_HEIGHT - h;
                html! {
                    <g key={*day}>
                        <rect x={x.to_string()} y={y.to_string()} width={bar_width.to_string()} height={h.to_string()}
                            fill="rgba(75, 192, 192, 0.2)" stroke="rgba(75, 192, 192, 1)" stroke-width="1">
                            <title>{ format!("{}일: {}", day, amount) }</title>
                        </rect>
                        <text x={(x + bar_width / 2.0).to_string()} y={(PLOT_HEIGHT + 16.0).to_string()}
                            text-anchor="middle" font-size="10" fill="#64748b">{ day.to_string() }</text>
                    </g>
                }
            }) }
        </svg>
    }
}

fn render_round(series: &[(u32, i64)], stroke_width: f64) -> Html {
    let segments = pie_segments(series);
    if segments.is_empty() {
        return html! { <p class="text-sm text-muted-foreground text-center py-6">{"지출 내역이 없습니다."}</p> };
    }

    let radius = 40.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    html! {
        <div class="flex items-center justify-center gap-6">
            <svg viewBox="0 0 120 120" class="w-28 h-28 transform -rotate-90" role="img">
                { for segments.iter().map(|segment| {
                    let dash = segment.len * circumference;
                    let offset = -(segment.start * circumference);
                    html! {
                        <circle key={segment.day} cx="60" cy="60" r={radius.to_string()} fill="transparent"
                            stroke={segment.color} stroke-width={stroke_width.to_string()}
                            stroke-dasharray={format!("{} {}", dash, circumference - dash)}
                            stroke-dashoffset={offset.to_string()} />
                    }
                }) }
            </svg>
            <ul class="space-y-1">
                { for segments.iter().map(|segment| html! {
                    <li key={segment.day} class="flex items-center gap-2 text-xs text-muted-foreground">
                        <span class="w-2 h-2 rounded-full inline-block" style={format!("background: {}", segment.color)}></span>
                        { format!("{}일", segment.day) }
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_scale_to_the_tallest_bar() {
        let series = vec![(1, 500), (2, 1000), (3, 0)];
        let heights = bar_heights(&series, 120.0);
        assert_eq!(heights, vec![60.0, 120.0, 0.0]);
    }

    #[test]
    fn bar_heights_of_an_empty_week_are_zero() {
        assert_eq!(bar_heights(&[(1, 0), (2, 0)], 120.0), vec![0.0, 0.0]);
    }

    #[test]
    fn pie_segments_cover_the_full_turn() {
        let series = vec![(1, 250), (2, 0), (3, 750)];
        let segments = pie_segments(&series);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].day, 1);
        assert!((segments[0].len - 0.25).abs() < 1e-9);
        assert!((segments[1].start - 0.25).abs() < 1e-9);
        let total: f64 = segments.iter().map(|s| s.len).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pie_segments_of_an_empty_week_are_empty() {
        assert!(pie_segments(&[(1, 0), (2, 0)]).is_empty());
    }
}
