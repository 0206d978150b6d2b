//! Update function for the employee component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render. Network calls run in
//! `spawn_local` and report back through further messages. Every successful
//! mutation is followed by a full `Msg::Refresh` rather than patching the
//! cached list.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::helpers::{confirm, delete_prompt, log_error, show_toast};
use super::messages::Msg;
use super::state::{EmployeesComponent, DELETE_FAILED, LOAD_FAILED};

pub fn update(
    component: &mut EmployeesComponent,
    ctx: &Context<EmployeesComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_employees().await {
                    Ok(employees) => link.send_message(Msg::EmployeesLoaded(employees)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::EmployeesLoaded(employees) => {
            component.replace_employees(employees);
            true
        }
        Msg::LoadFailed(detail) => {
            log_error(LOAD_FAILED, &detail);
            component.set_error(LOAD_FAILED);
            true
        }
        Msg::UpdateField(field, value) => {
            component.set_field(field, value);
            true
        }
        Msg::Edit(employee) => {
            component.begin_edit(&employee);
            true
        }
        Msg::Cancel => component.cancel_edit(),
        Msg::Submit => {
            let Some(submission) = component.begin_submit() else {
                return false;
            };

            let kind = submission.kind();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::submit(&submission).await {
                    Ok(_) => link.send_message(Msg::SubmitSucceeded(kind)),
                    Err(err) => link.send_message(Msg::SubmitFailed(kind, err.to_string())),
                }
            });
            true
        }
        Msg::SubmitSucceeded(kind) => {
            show_toast(kind.success_message());
            component.submit_succeeded();
            ctx.link().send_message(Msg::Refresh);
            true
        }
        Msg::SubmitFailed(kind, detail) => {
            log_error(kind.failure_message(), &detail);
            component.submit_failed(kind);
            true
        }
        Msg::Delete(employee) => {
            // Independent of the form: deleting the row being edited keeps the form as is.
            if !confirm(&delete_prompt(&employee)) {
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_employee(employee.id).await {
                    Ok(_) => link.send_message(Msg::DeleteSucceeded),
                    Err(err) => link.send_message(Msg::DeleteFailed(err.to_string())),
                }
            });
            false
        }
        Msg::DeleteSucceeded => {
            show_toast("Employee deleted successfully");
            ctx.link().send_message(Msg::Refresh);
            false
        }
        Msg::DeleteFailed(detail) => {
            log_error(DELETE_FAILED, &detail);
            component.set_error(DELETE_FAILED);
            true
        }
    }
}
