use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_staff::ui::leader_list::LeaderList;
use crate::domain::a002_staff::ui::salesperson_list::SalespersonList;
use crate::domain::a003_member::ui::list::MemberList;
use crate::domain::a004_recharge::ui::list::RechargeList;
use crate::domain::a005_consume::ui::list::ConsumeList;
use crate::domain::a007_reservation::ui::grid::ScheduleGrid;
use crate::layout::Shell;
use crate::shared::query_cache::QueryCache;
use crate::system::auth::Session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

/// Every page except login sits inside the authenticated `Shell`, which
/// redirects anonymous visitors to the login view (keeping the requested
/// location). Unmatched paths fall through to the 404 page.
#[component]
pub fn AppRoutes(session: Session, cache: QueryCache) -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route
                    path=path!("/login")
                    view=move || view! { <LoginPage session=session/> }
                />
                <Route
                    path=path!("/")
                    view=move || view! {
                        <Shell session=session>
                            <ScheduleGrid session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/stores")
                    view=move || view! {
                        <Shell session=session>
                            <StoreList session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/leaders")
                    view=move || view! {
                        <Shell session=session>
                            <LeaderList session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/salespersons")
                    view=move || view! {
                        <Shell session=session>
                            <SalespersonList session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/members")
                    view=move || view! {
                        <Shell session=session>
                            <MemberList session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/recharges")
                    view=move || view! {
                        <Shell session=session>
                            <RechargeList session=session cache=cache/>
                        </Shell>
                    }
                />
                <Route
                    path=path!("/consumes")
                    view=move || view! {
                        <Shell session=session>
                            <ConsumeList session=session cache=cache/>
                        </Shell>
                    }
                />
            </Routes>
        </Router>
    }
}
