use yew::prelude::*;

const SPARKLES: usize = 6;
const SPARKLE_RADIUS: f64 = 20.0;

#[derive(Properties, PartialEq, Clone)]
pub struct ParticleEffectProps {
    pub x: f64,
    pub y: f64,
}

#[function_component]
pub fn ParticleEffect(props: &ParticleEffectProps) -> Html {
    let sparkles = (0..SPARKLES).map(|i| {
        let angle = (i as f64 * 60.0).to_radians();
        let style = format!(
            "position:absolute; width:8px; height:8px; border-radius:50%; background:#fff3b0; left:{:.1}px; top:{:.1}px; animation-delay:{:.1}s;",
            angle.cos() * SPARKLE_RADIUS,
            angle.sin() * SPARKLE_RADIUS,
            i as f64 * 0.1
        );
        html! { <div key={i} class="coin-collect" style={style}></div> }
    });
    html! {
        <div style={format!("position:fixed; pointer-events:none; z-index:50; left:{}px; top:{}px;", props.x - 10.0, props.y - 10.0)}>
            <div style="position:relative;">
                <div class="coin-collect" style="width:20px; height:20px; border-radius:50%; background:#ffd700;"></div>
                { for sparkles }
            </div>
        </div>
    }
}
