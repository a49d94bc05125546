use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TitleBannerProps {
    pub subtitle: AttrValue,
}

#[function_component(TitleBanner)]
pub fn title_banner(props: &TitleBannerProps) -> Html {
    html! {
        <div style="text-align:center; margin-bottom:32px;">
            <div style="display:flex; align-items:center; justify-content:center; gap:8px; margin-bottom:16px;">
                <span class="pulse" style="font-size:28px;">{"✨"}</span>
                <h1 style="margin:0; font-size:56px; font-weight:800; background:linear-gradient(90deg, #b8860b, #ffd700); -webkit-background-clip:text; background-clip:text; color:transparent;">{"SLERF"}</h1>
                <span class="pulse" style="font-size:28px;">{"✨"}</span>
            </div>
            <p style="margin:0 auto; max-width:28rem; font-size:18px; color:#4b5563;">{ props.subtitle.clone() }</p>
        </div>
    }
}
