use crate::util::progress_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameStatsProps {
    pub click_count: u32,
    pub total_clicks: u32,
}

#[function_component]
pub fn GameStats(props: &GameStatsProps) -> Html {
    let card_style = "background:#fff; border:1px solid #f3f4f6; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.08); padding:12px 16px; min-width:120px; text-align:center;";
    let label_style = "display:flex; align-items:center; justify-content:center; gap:6px; font-size:13px; font-weight:500; color:#4b5563;";
    let value_style = "font-size:24px; font-weight:700; font-variant-numeric:tabular-nums;";
    let progress = progress_percent(props.click_count, props.total_clicks).round();
    html! {
        <div style="display:flex; flex-wrap:wrap; justify-content:center; gap:16px; margin-bottom:32px;">
            <div style={card_style}>
                <div style={label_style}><span>{"⚡"}</span><span>{"Clicks"}</span></div>
                <div style={format!("{} color:#b8860b;", value_style)}>{ props.click_count }</div>
            </div>
            <div style={card_style}>
                <div style={label_style}><span>{"🎯"}</span><span>{"Target"}</span></div>
                <div style={format!("{} color:#2563eb;", value_style)}>{ props.total_clicks }</div>
            </div>
            <div style={card_style}>
                <div style={label_style}><span>{"🏆"}</span><span>{"Progress"}</span></div>
                <div style={format!("{} color:#16a34a;", value_style)}>{ format!("{}%", progress) }</div>
            </div>
        </div>
    }
}
