use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{MouseEvent, Storage};
use yew::prelude::*;

use crate::error::PlatformError;

const CONSENT_KEY: &str = "cookieConsent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(self) -> &'static str {
        match self {
            Consent::Accepted => "true",
            Consent::Declined => "false",
        }
    }
}

/// Any non-empty stored value counts as an answer, whatever it says.
fn is_answered(stored: Option<&str>) -> bool {
    stored.map_or(false, |value| !value.is_empty())
}

fn storage() -> Result<Storage, PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| PlatformError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| PlatformError::Storage("not provided".to_string()))
}

fn has_answered() -> Result<bool, PlatformError> {
    let stored = storage()?
        .get_item(CONSENT_KEY)
        .map_err(|e| PlatformError::Storage(format!("{:?}", e)))?;
    Ok(is_answered(stored.as_deref()))
}

fn store_consent(consent: Consent) -> Result<(), PlatformError> {
    storage()?
        .set_item(CONSENT_KEY, consent.as_str())
        .map_err(|e| PlatformError::Storage(format!("{:?}", e)))
}

#[derive(Properties, PartialEq)]
pub struct CookieConsentProps {
    pub delay_ms: u32,
    pub exit_ms: u32,
}

#[function_component(CookieConsent)]
pub fn cookie_consent(props: &CookieConsentProps) -> Html {
    let is_visible = use_state(|| false);
    let animate_out = use_state(|| false);
    // exit animation timer, dropped (and cancelled) with the component
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let show_after = match has_answered() {
                    Ok(true) => None,
                    Ok(false) => Some(*delay_ms),
                    Err(e) => {
                        warn!("cookie consent: {}", e);
                        Some(*delay_ms)
                    }
                };
                let timer = show_after.map(|delay| Timeout::new(delay, move || is_visible.set(true)));
                move || drop(timer)
            },
            props.delay_ms,
        );
    }

    let respond = |consent: Consent| {
        let is_visible = is_visible.clone();
        let animate_out = animate_out.clone();
        let exit_timer = exit_timer.clone();
        let exit_ms = props.exit_ms;
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = store_consent(consent) {
                warn!("cookie consent not saved: {}", e);
            }
            info!("Cookie consent: {:?}", consent);
            animate_out.set(true);
            let is_visible = is_visible.clone();
            *exit_timer.borrow_mut() = Some(Timeout::new(exit_ms, move || is_visible.set(false)));
        })
    };

    if !*is_visible {
        return html! {};
    }

    html! {
        <div class={classes!("cookie-banner", (*animate_out).then(|| "leaving"))}>
            <div class="cookie-card">
                <div class="cookie-copy">
                    <h3>{"We value your privacy"}</h3>
                    <p>
                        {"We use cookies to enhance your browsing experience, serve personalized ads or content, and analyze our traffic. By clicking \"Accept All\", you consent to our use of cookies as described in our Cookie Policy."}
                    </p>
                </div>
                <div class="cookie-actions">
                    <button class="btn-secondary" onclick={respond(Consent::Declined)}>{"Decline"}</button>
                    <button class="btn-primary" onclick={respond(Consent::Accepted)}>{"Accept All"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_stored_as_true_and_false() {
        assert_eq!(Consent::Accepted.as_str(), "true");
        assert_eq!(Consent::Declined.as_str(), "false");
        assert!(is_answered(Some(Consent::Declined.as_str())));
    }

    #[test]
    fn any_non_empty_value_counts_as_answered() {
        assert!(is_answered(Some("true")));
        assert!(is_answered(Some("yes")));
        assert!(is_answered(Some("0")));
        assert!(!is_answered(Some("")));
        assert!(!is_answered(None));
    }
}
