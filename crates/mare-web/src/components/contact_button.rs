//! Outbound contact link button.

use mare_core::ContactLink;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

/// Props for the ContactButton component.
#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    pub link: ContactLink,
    #[prop_or_default]
    pub class: Classes,
}

/// Opens a contact deep link in a new tab. The href is passed through as-is.
#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    html! {
        <a
            class={classes!("contact-button", props.class.clone())}
            href={props.link.href}
            target="_blank"
            rel="noopener noreferrer"
        >
            <Icon data={IconData::LUCIDE_MESSAGE_CIRCLE} width="18px" height="18px" />
            <span>{ props.link.label }</span>
        </a>
    }
}
