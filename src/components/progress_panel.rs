use crate::util::{clicks_to_go_label, progress_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressPanelProps {
    pub click_count: u32,
    pub total_clicks: u32,
}

#[function_component(ProgressPanel)]
pub fn progress_panel(props: &ProgressPanelProps) -> Html {
    let progress = progress_percent(props.click_count, props.total_clicks);
    let remaining = props.total_clicks.saturating_sub(props.click_count);
    html! {<>
        <div style="width:100%; max-width:28rem; margin-bottom:24px;">
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px; font-size:14px; font-weight:500;">
                <span style="color:#4b5563;">{"Progress"}</span>
                <span style="color:#b8860b;">{ format!("{}/{}", props.click_count, props.total_clicks) }</span>
            </div>
            <div style="width:100%; height:12px; background:#e5e7eb; border-radius:9999px; overflow:hidden;">
                <div style={format!("height:100%; width:{}%; background:linear-gradient(90deg, #ffd700, #b8860b); transition:width 0.5s ease-out;", progress)}></div>
            </div>
        </div>
        <div id="coin-instructions" style="text-align:center; color:#6b7280; max-width:24rem;">
            <p style="font-size:14px; margin:0 0 8px 0;">
                {"💡 "}<strong>{"Tip:"}</strong>{" You can also press "}
                <kbd style="padding:2px 8px; background:#e5e7eb; border-radius:4px; font-size:12px;">{"Space"}</kbd>
                {" to click!"}
            </p>
            if props.click_count > 0 && remaining > 0 {
                <p class="pulse" style="font-size:12px; margin:0;">{ clicks_to_go_label(remaining) }</p>
            }
        </div>
    </>}
}
