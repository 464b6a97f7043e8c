//! Section whose content animates with scroll.

use mare_core::{Choreography, ScrollRange};
use yew::prelude::*;

use crate::hooks::use_scroll_progress;

/// Props for the ScrollSection component.
#[derive(Properties, PartialEq)]
pub struct ScrollSectionProps {
    pub children: Children,
    pub choreography: Choreography,
    #[prop_or_default]
    pub range: ScrollRange,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Measures the outer section and applies the choreography to its inner
/// stage, so the transform never feeds back into the measurement.
#[function_component(ScrollSection)]
pub fn scroll_section(props: &ScrollSectionProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), props.range);
    let style = props.choreography.style_at(progress).to_css();

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("scroll-section", props.class.clone())}
            data-progress={format!("{progress:.3}")}
        >
            <div class="scroll-stage" style={style}>
                { props.children.clone() }
            </div>
        </section>
    }
}
