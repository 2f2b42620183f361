use yew::prelude::*;

use crate::analytics::{ChartLayout, MARGIN_LEFT};
use crate::types::DayCount;

#[derive(Properties, PartialEq)]
pub struct NotesChartProps {
    pub data: Vec<DayCount>,
    pub color: String,
    pub height: u32,
}

#[function_component(NotesChart)]
pub fn notes_chart(props: &NotesChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);
    let layout = ChartLayout::compute(&props.data, props.height as f64);
    let baseline = layout.baseline();

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let tooltip = (*hovered)
        .and_then(|i| layout.bars.get(i))
        .map(|bar| {
            let x = (bar.label_x - 50.0).max(0.0);
            let y = (bar.y - 44.0).max(0.0);
            html! {
                <g pointer-events="none">
                    <rect x={x.to_string()} y={y.to_string()} width="100" height="38" rx="4" fill="white" stroke="#ccc" />
                    <text x={(x + 50.0).to_string()} y={(y + 15.0).to_string()} text-anchor="middle" font-size="12" fill="#333">
                        { &bar.date }
                    </text>
                    <text x={(x + 50.0).to_string()} y={(y + 30.0).to_string()} text-anchor="middle" font-size="12" fill={props.color.clone()}>
                        { format!("count : {}", bar.count) }
                    </text>
                </g>
            }
        })
        .unwrap_or_default();

    html! {
        <div style="width:100%; overflow-x:auto;">
            <svg
                width={layout.width.to_string()}
                height={layout.height.to_string()}
                viewBox={format!("0 0 {} {}", layout.width, layout.height)}
                onmouseleave={on_leave}
            >
                <line
                    x1={MARGIN_LEFT.to_string()} y1="0"
                    x2={MARGIN_LEFT.to_string()} y2={baseline.to_string()}
                    stroke="#666"
                />
                <line
                    x1={MARGIN_LEFT.to_string()} y1={baseline.to_string()}
                    x2={layout.width.to_string()} y2={baseline.to_string()}
                    stroke="#666"
                />
                { for layout.y_ticks.iter().map(|tick| html! {
                    <text
                        x={(MARGIN_LEFT - 8.0).to_string()}
                        y={(tick.y + 4.0).to_string()}
                        text-anchor="end"
                        font-size="12"
                        fill="#666"
                    >
                        { tick.value.to_string() }
                    </text>
                }) }
                { for layout.bars.iter().enumerate().map(|(i, bar)| {
                    let on_enter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                    };
                    html! {
                        <g key={bar.date.clone()}>
                            <rect
                                x={bar.x.to_string()}
                                y={bar.y.to_string()}
                                width={bar.width.to_string()}
                                height={bar.height.to_string()}
                                fill={props.color.clone()}
                                opacity={if *hovered == Some(i) { "0.8" } else { "1" }}
                                onmouseenter={on_enter}
                            />
                            <text
                                x={bar.label_x.to_string()}
                                y={(baseline + 18.0).to_string()}
                                text-anchor="middle"
                                font-size="12"
                                fill="#666"
                            >
                                { &bar.date }
                            </text>
                        </g>
                    }
                }) }
                { tooltip }
            </svg>
        </div>
    }
}
