//! Selectable card for the "How do you travel?" step.

use dioxus::prelude::*;
use tourails_core::AccountType;

#[component]
pub fn AccountTypeCard(
    account_type: AccountType,
    selected: bool,
    on_select: EventHandler<AccountType>,
) -> Element {
    rsx! {
        button {
            class: if selected { "account-type-card selected" } else { "account-type-card glass-card" },
            "aria-pressed": if selected { "true" } else { "false" },
            onclick: move |_| on_select.call(account_type),
            span { class: "account-type-emoji", "{account_type.emoji()}" }
            h3 { class: "account-type-title", "{account_type.title()}" }
            p { class: "account-type-description", "{account_type.description()}" }
        }
    }
}
