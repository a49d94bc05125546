use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CoinButtonProps {
    pub on_click: Callback<()>,
    pub is_animating: bool,
    pub is_near_unlock: bool,
    pub click_count: u32,
    /// Attached to the button so the controller can find its centre.
    pub node_ref: NodeRef,
}

#[function_component]
pub fn CoinButton(props: &CoinButtonProps) -> Html {
    let click_cb = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let motion = if props.is_animating { "coin-flip" } else { "coin-float" };
    let glow = if props.is_near_unlock { "coin-glow" } else { "coin-pulse" };
    html! {
        <button
            id="coin-button"
            ref={props.node_ref.clone()}
            class={classes!("coin-button", motion, glow)}
            onclick={click_cb}
            aria-label={format!("Click coin to collect. {} clicks collected.", props.click_count)}
            aria-describedby="coin-instructions"
            style="position:relative; width:128px; height:128px; border-radius:50%; border:4px solid #b8860b; background:radial-gradient(circle at 35% 35%, #fff3b0, #ffd700 55%, #b8860b); cursor:pointer; font-size:48px;"
        >
            <span style="position:relative; z-index:1;">{"🪙"}</span>
            if props.is_animating {
                <span class="ping" style="position:absolute; inset:0; border-radius:50%; background:#fff3b0; opacity:0.5;"></span>
            }
        </button>
    }
}
