use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

struct NavItem {
    href: &'static str,
    icon_name: &'static str,
    label: &'static str,
}

const NAV: &[NavItem] = &[
    NavItem { href: "/", icon_name: "calendar", label: "房间预定" },
    NavItem { href: "/stores", icon_name: "store", label: "门店管理" },
    NavItem { href: "/leaders", icon_name: "users", label: "团队长" },
    NavItem { href: "/salespersons", icon_name: "user", label: "销售" },
    NavItem { href: "/members", icon_name: "credit-card", label: "会员" },
    NavItem { href: "/recharges", icon_name: "list", label: "充值记录" },
    NavItem { href: "/consumes", icon_name: "list", label: "消费记录" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {NAV
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="sidebar__item">
                                <A href=item.href exact=true>
                                    {icon(item.icon_name)}
                                    <span>{item.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
