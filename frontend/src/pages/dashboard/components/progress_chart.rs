use crate::{
    api::{ChartPeriod, ChartPoint},
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::utils::average_completions,
};
use leptos::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// SVG `points` attribute for the completion line.
    pub line: String,
    pub average: f64,
    pub average_y: f64,
    pub max: u32,
}

/// Maps points onto a `width` x `height` canvas, leaving `padding` on every
/// side. The y axis starts at zero and tops out at the largest count.
pub fn chart_geometry(
    points: &[ChartPoint],
    width: f64,
    height: f64,
    padding: f64,
) -> Option<ChartGeometry> {
    let average = average_completions(points)?;
    let max = points.iter().map(|point| point.completions).max().unwrap_or(0).max(1);
    let plot_width = width - padding * 2.0;
    let plot_height = height - padding * 2.0;
    let y_for = |value: f64| padding + plot_height - (value / f64::from(max)) * plot_height;

    let step = if points.len() > 1 {
        plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let line = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if points.len() > 1 {
                padding + step * index as f64
            } else {
                width / 2.0
            };
            format!("{:.1},{:.1}", x, y_for(f64::from(point.completions)))
        })
        .collect::<Vec<_>>()
        .join(" ");

    Some(ChartGeometry {
        line,
        average,
        average_y: y_for(average),
        max,
    })
}

#[component]
pub fn ProgressChart(
    points: Signal<Vec<ChartPoint>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    period: Signal<ChartPeriod>,
    on_period_change: Callback<ChartPeriod>,
) -> impl IntoView {
    let geometry = create_memo(move |_| {
        points.with(|points| chart_geometry(points, VIEW_WIDTH, VIEW_HEIGHT, PADDING))
    });
    let axis_labels = create_memo(move |_| {
        points.with(|points| {
            (
                points.first().map(|point| point.date.clone()).unwrap_or_default(),
                points.last().map(|point| point.date.clone()).unwrap_or_default(),
            )
        })
    });

    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900">"Your Progress"</h2>
                <select
                    class="px-3 py-2 border border-gray-300 rounded-md text-sm"
                    aria-label="Chart period"
                    prop:value=move || period.get().as_query()
                    on:change=move |ev| {
                        if let Some(selected) = ChartPeriod::parse(&event_target_value(&ev)) {
                            on_period_change.call(selected);
                        }
                    }
                >
                    {ChartPeriod::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_query()
                                    selected=move || period.get() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            {move || {
                if loading.get() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorMessage message=message /> }.into_view();
                }
                match geometry.get() {
                    None => view! {
                        <div class="text-center py-10 text-gray-500">
                            <p>"Not enough data to display a chart yet."</p>
                            <p class="text-sm">"Complete some habits to see your progress!"</p>
                        </div>
                    }
                    .into_view(),
                    Some(geometry) => {
                        let (first, last) = axis_labels.get();
                        let avg_label = format!("Avg: {:.1}", geometry.average);
                        view! {
                            <svg
                                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                                class="w-full h-60"
                                role="img"
                                aria-label="Completions over time"
                            >
                                <line
                                    x1=PADDING
                                    x2=VIEW_WIDTH - PADDING
                                    y1=VIEW_HEIGHT - PADDING
                                    y2=VIEW_HEIGHT - PADDING
                                    stroke="#e5e7eb"
                                />
                                <line
                                    x1=PADDING
                                    x2=VIEW_WIDTH - PADDING
                                    y1=geometry.average_y
                                    y2=geometry.average_y
                                    stroke="#9ca3af"
                                    stroke-dasharray="6 4"
                                />
                                <text
                                    x=VIEW_WIDTH - PADDING
                                    y=geometry.average_y - 4.0
                                    text-anchor="end"
                                    class="fill-gray-500 text-xs"
                                >
                                    {avg_label}
                                </text>
                                <polyline
                                    points=geometry.line
                                    fill="none"
                                    stroke="#4f46e5"
                                    stroke-width="2"
                                />
                                <text x=PADDING y=VIEW_HEIGHT - 8.0 class="fill-gray-500 text-xs">
                                    {first}
                                </text>
                                <text
                                    x=VIEW_WIDTH - PADDING
                                    y=VIEW_HEIGHT - 8.0
                                    text-anchor="end"
                                    class="fill-gray-500 text-xs"
                                >
                                    {last}
                                </text>
                                <text x=4.0 y=PADDING class="fill-gray-500 text-xs">
                                    {geometry.max}
                                </text>
                            </svg>
                        }
                        .into_view()
                    }
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, completions: u32) -> ChartPoint {
        ChartPoint {
            date: date.into(),
            completions,
        }
    }

    #[test]
    fn empty_series_has_no_geometry() {
        assert_eq!(chart_geometry(&[], 600.0, 240.0, 32.0), None);
    }

    #[test]
    fn points_span_the_plot_horizontally() {
        let points = [point("Mon", 0), point("Tue", 2), point("Wed", 4)];
        let geometry = chart_geometry(&points, 200.0, 100.0, 0.0).unwrap();
        assert_eq!(geometry.line, "0.0,100.0 100.0,50.0 200.0,0.0");
        assert_eq!(geometry.max, 4);
        assert_eq!(geometry.average, 2.0);
        assert_eq!(geometry.average_y, 50.0);
    }

    #[test]
    fn single_point_sits_in_the_middle() {
        let geometry = chart_geometry(&[point("Mon", 3)], 200.0, 100.0, 10.0).unwrap();
        assert_eq!(geometry.line, "100.0,10.0");
    }

    #[test]
    fn all_zero_series_stays_on_the_baseline() {
        let points = [point("Mon", 0), point("Tue", 0)];
        let geometry = chart_geometry(&points, 100.0, 100.0, 0.0).unwrap();
        assert_eq!(geometry.max, 1);
        assert_eq!(geometry.line, "0.0,100.0 100.0,100.0");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(points: Vec<ChartPoint>) -> String {
        render_to_string(move || {
            view! {
                <ProgressChart
                    points=Signal::derive(move || points.clone())
                    loading=Signal::derive(|| false)
                    error=Signal::derive(|| None)
                    period=Signal::derive(|| ChartPeriod::Week)
                    on_period_change=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn empty_series_shows_placeholder() {
        let html = render(Vec::new());
        assert!(html.contains("Not enough data to display a chart yet."));
        assert!(html.contains("Last 7 days"));
        assert!(!html.contains("<polyline"));
    }

    #[test]
    fn series_renders_line_and_average_label() {
        let html = render(vec![
            ChartPoint { date: "Mon".into(), completions: 1 },
            ChartPoint { date: "Tue".into(), completions: 2 },
        ]);
        assert!(html.contains("<polyline"));
        assert!(html.contains("Avg: 1.5"));
        assert!(html.contains("Mon"));
    }
}
