//! Employee form and list: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, view
//! rendering, the HTTP client and DOM helpers.
//!
//! On first render the component fetches the employee list once; after that
//! the list is only re-fetched after a successful create, update or delete.

use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::EmployeesComponent;

impl Component for EmployeesComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EmployeesComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
