use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser::{alert, copy_to_clipboard};
use crate::model::COPIED_FLAG_MS;
use crate::util::short_address;
use crate::wallet::{InjectedProvider, WalletProvider, connect};

#[derive(Properties, PartialEq, Clone)]
pub struct WalletConnectProps {
    pub on_connect: Callback<String>,
    pub on_disconnect: Callback<()>,
    #[prop_or(false)]
    pub connected: bool,
    #[prop_or_default]
    pub address: Option<String>,
}

#[function_component]
pub fn WalletConnect(props: &WalletConnectProps) -> Html {
    let connecting = use_state(|| false);
    let copied = use_state(|| false);

    let connect_cb = {
        let connecting = connecting.clone();
        let on_connect = props.on_connect.clone();
        Callback::from(move |_: MouseEvent| {
            let provider = InjectedProvider::detect();
            connecting.set(provider.is_some());
            let connecting = connecting.clone();
            let on_connect = on_connect.clone();
            spawn_local(async move {
                let provider = provider.as_ref().map(|p| p as &dyn WalletProvider);
                match connect(provider).await {
                    Ok(Some(address)) => {
                        log::info!("wallet connected: {}", short_address(&address));
                        on_connect.emit(address);
                    }
                    Ok(None) => log::warn!("wallet returned no accounts"),
                    Err(err) => {
                        log::error!("Failed to connect wallet: {}", err);
                        alert(err.user_message());
                    }
                }
                connecting.set(false);
            });
        })
    };

    let disconnect_cb = {
        let cb = props.on_disconnect.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let copy_cb = {
        let copied = copied.clone();
        let address = props.address.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(address) = address.clone() else {
                return;
            };
            let copied = copied.clone();
            spawn_local(async move {
                match copy_to_clipboard(&address).await {
                    Ok(()) => {
                        copied.set(true);
                        Timeout::new(COPIED_FLAG_MS, move || copied.set(false)).forget();
                    }
                    Err(err) => log::warn!("Failed to copy address: {}", err),
                }
            });
        })
    };

    if let (true, Some(address)) = (props.connected, props.address.as_ref()) {
        return html! {
            <div style="display:flex; align-items:center; gap:8px; background:#fff; border:1px solid #e5e7eb; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.08); padding:12px;">
                <span class="pulse" style="width:12px; height:12px; border-radius:50%; background:#22c55e;"></span>
                <code style="font-size:14px; color:#374151;">{ short_address(address) }</code>
                <button onclick={copy_cb} aria-label="Copy wallet address" style="padding:4px; border:none; background:none; cursor:pointer;">
                    { if *copied { "✔" } else { "⧉" } }
                </button>
                <button onclick={disconnect_cb} aria-label="Disconnect wallet" style="padding:8px; border:none; background:none; color:#dc2626; cursor:pointer;">{"⏻"}</button>
            </div>
        };
    }

    html! {
        <button
            onclick={connect_cb}
            disabled={*connecting}
            aria-label="Connect Web3 wallet"
            style="display:flex; align-items:center; gap:12px; padding:12px 24px; background:linear-gradient(90deg, #2563eb, #9333ea); color:#fff; border:none; border-radius:8px; font-weight:500; cursor:pointer;"
        >
            <span>{"👛"}</span>
            if *connecting {
                <span class="spin" style="width:16px; height:16px; border:2px solid #fff; border-top-color:transparent; border-radius:50%;"></span>
                {"Connecting..."}
            } else {
                {"Connect Wallet"}
            }
        </button>
    }
}
