use crate::config::{SLERF_CONTRACT, chart_widget_url, pair_explorer_url};
use crate::util::short_address;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    pub click_count: u32,
    #[prop_or_default]
    pub wallet_address: Option<String>,
    pub on_play_again: Callback<()>,
}

#[derive(Properties, PartialEq, Clone)]
struct StatCardProps {
    label: &'static str,
    value: String,
    icon: &'static str,
    color: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div style="background:#fff; border:1px solid #e5e7eb; border-radius:12px; box-shadow:0 4px 12px rgba(0,0,0,0.08); padding:24px; display:flex; align-items:center; justify-content:space-between;">
            <div>
                <p style="margin:0; font-size:14px; font-weight:500; color:#4b5563;">{ props.label }</p>
                <p style={format!("margin:0; font-size:24px; font-weight:700; color:{};", props.color)}>{ props.value.clone() }</p>
            </div>
            <div style="font-size:24px;">{ props.icon }</div>
        </div>
    }
}

#[function_component(DetailRow)]
fn detail_row(props: &DetailRowProps) -> Html {
    html! {
        <div style="display:flex; justify-content:space-between; margin:8px 0;">
            <span style="color:#4b5563;">{ props.label }</span>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct DetailRowProps {
    label: &'static str,
    children: Html,
}

#[function_component]
pub fn Dashboard(props: &DashboardProps) -> Html {
    let loading = use_state(|| true);
    let on_chart_load = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };
    let play_again_cb = {
        let cb = props.on_play_again.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let wallet_text = props
        .wallet_address
        .as_deref()
        .map(short_address)
        .unwrap_or_else(|| "Not connected".to_string());
    let code_style = "font-size:14px; background:#f3f4f6; padding:2px 8px; border-radius:4px; font-family:monospace;";
    let panel_style = "background:#fff; border:1px solid #e5e7eb; border-radius:12px; box-shadow:0 4px 12px rgba(0,0,0,0.08); padding:24px;";

    html! {
        <div style="min-height:100vh; background:linear-gradient(135deg, #f9fafb, #f3f4f6); padding:16px;">
            <div style="max-width:80rem; margin:0 auto;">
                <header style="display:flex; flex-wrap:wrap; justify-content:space-between; align-items:center; gap:16px; margin-bottom:32px;">
                    <div>
                        <h1 style="margin:0 0 8px 0; font-size:36px; color:#1f2937;">{"🎉 SLERF Dashboard Unlocked!"}</h1>
                        <p style="margin:0; color:#4b5563;">
                            { format!("Congratulations! You collected {} coins and unlocked the trading dashboard.", props.click_count) }
                        </p>
                    </div>
                    <button onclick={play_again_cb} aria-label="Play the coin game again" style="display:flex; align-items:center; gap:8px; padding:12px 24px; background:#ffd700; color:#fff; border:none; border-radius:8px; font-weight:500; cursor:pointer;">
                        {"↻ Play Again"}
                    </button>
                </header>

                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(200px, 1fr)); gap:24px; margin-bottom:32px;">
                    <StatCard label="Token" value={"SLERF".to_string()} icon="💲" color="#111827" />
                    <StatCard label="Chain" value={"Base".to_string()} icon="📈" color="#2563eb" />
                    <StatCard label="Clicks" value={props.click_count.to_string()} icon="🚀" color="#16a34a" />
                    <StatCard label="Status" value={"Live".to_string()} icon="📊" color="#9333ea" />
                </div>

                <div style={format!("{} margin-bottom:32px;", panel_style)}>
                    <div style="display:flex; flex-wrap:wrap; justify-content:space-between; align-items:center; gap:12px; margin-bottom:24px;">
                        <div>
                            <h2 style="margin:0 0 8px 0; font-size:24px; color:#1f2937;">{"SLERF Trading Chart"}</h2>
                            <p style="margin:0; color:#4b5563;">{"Real-time trading data powered by DEXTools"}</p>
                        </div>
                        <a
                            href={pair_explorer_url(SLERF_CONTRACT)}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Open SLERF chart in DEXTools (opens in new tab)"
                            style="padding:8px 16px; background:#2563eb; color:#fff; border-radius:8px; text-decoration:none; font-weight:500;"
                        >{"↗ Open in DEXTools"}</a>
                    </div>
                    <div style="position:relative; width:100%; height:600px; background:#f9fafb; border-radius:8px; overflow:hidden;">
                        if *loading {
                            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:#f3f4f6;">
                                <div style="text-align:center;">
                                    <div class="spin" style="width:48px; height:48px; margin:0 auto 16px auto; border-radius:50%; border-bottom:2px solid #ffd700;"></div>
                                    <p style="color:#4b5563;">{"Loading SLERF chart..."}</p>
                                </div>
                            </div>
                        }
                        <iframe
                            src={chart_widget_url(SLERF_CONTRACT)}
                            onload={on_chart_load}
                            title="SLERF Token Trading Chart"
                            sandbox="allow-scripts allow-same-origin allow-popups allow-forms"
                            style="width:100%; height:100%; border:0;"
                        />
                    </div>
                </div>

                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(320px, 1fr)); gap:24px;">
                    <div style={panel_style}>
                        <h3 style="margin:0 0 16px 0; font-size:20px; color:#1f2937;">{"Token Details"}</h3>
                        <DetailRow label="Contract Address:"><code style={code_style}>{ short_address(SLERF_CONTRACT) }</code></DetailRow>
                        <DetailRow label="Network:"><span style="font-weight:500;">{"Base Chain"}</span></DetailRow>
                        <DetailRow label="Symbol:"><span style="font-weight:500;">{"SLERF"}</span></DetailRow>
                    </div>
                    <div style={panel_style}>
                        <h3 style="margin:0 0 16px 0; font-size:20px; color:#1f2937;">{"Game Stats"}</h3>
                        <DetailRow label="Wallet Address:"><code style={code_style}>{ wallet_text }</code></DetailRow>
                        <DetailRow label="Coins Collected:"><span style="font-weight:500; color:#b8860b;">{ props.click_count }</span></DetailRow>
                        <DetailRow label="Dashboard Status:"><span style="font-weight:500; color:#16a34a;">{"Unlocked ✅"}</span></DetailRow>
                        <DetailRow label="Achievement:"><span style="font-weight:500; color:#9333ea;">{"Coin Master 🏆"}</span></DetailRow>
                    </div>
                </div>

                <footer style="margin-top:48px; text-align:center; color:#6b7280; font-size:14px;">
                    <p>{"SLERF Token Dashboard • Built with Rust & Yew"}</p>
                </footer>
            </div>
        </div>
    }
}
