use yew::prelude::*;

use crate::motion::{use_ramp, use_visibility, VisibilityOptions};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub end: f64,
    pub duration_ms: u32,
    pub threshold: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A number that counts up from zero the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityOptions::sticky(props.threshold));
    let value = use_ramp(props.end, props.duration_ms, visible);

    html! {
        <div ref={node} class="counter-value">
            {format!("{}{}{}", props.prefix, value, props.suffix)}
        </div>
    }
}
