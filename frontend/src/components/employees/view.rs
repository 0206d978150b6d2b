//! View rendering for the employee component: the form card on top and the
//! table of fetched rows below.

use super::messages::Msg;
use super::state::{EmployeesComponent, Field};
use common::model::employee::Employee;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &EmployeesComponent, ctx: &Context<EmployeesComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="employees-root">
            { build_form(component, link) }
            { build_table(component, link) }
        </div>
    }
}

fn build_form(component: &EmployeesComponent, link: &Scope<EmployeesComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let submit_class = if component.is_editing() {
        "btn btn-warning"
    } else {
        "btn btn-success"
    };

    html! {
        <div class="card text-center">
            <div class="card-header">{"EMPLOYEE MANAGEMENT"}</div>
            <form {onsubmit}>
                <div class="card-body">
                    {
                        if let Some(error) = &component.error {
                            html! { <div class="alert alert-danger">{ error.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }
                    { for Field::ALL.into_iter().map(|field| build_input(component, link, field)) }
                </div>
                <div class="card-footer text-muted">
                    <button type="submit" class={submit_class} disabled={component.loading}>
                        { component.submit_label() }
                    </button>
                    {
                        if component.is_editing() {
                            html! {
                                <button
                                    type="button"
                                    class="btn btn-secondary ms-2"
                                    onclick={link.callback(|_| Msg::Cancel)}
                                >
                                    {"Cancel"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </form>
        </div>
    }
}

fn build_input(
    component: &EmployeesComponent,
    link: &Scope<EmployeesComponent>,
    field: Field,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });
    let input_type = if field.is_numeric() { "number" } else { "text" };

    html! {
        <div class="input-group mb-3">
            <span class="input-group-text">{ format!("{}:", field.label()) }</span>
            <input
                type={input_type}
                class="form-control"
                placeholder={field.placeholder()}
                value={field.value(&component.form).to_string()}
                min="0"
                required={true}
                {oninput}
            />
        </div>
    }
}

fn build_table(component: &EmployeesComponent, link: &Scope<EmployeesComponent>) -> Html {
    html! {
        <table class="table table-striped mt-4">
            <thead>
                <tr>
                    <th scope="col">{"#"}</th>
                    <th scope="col">{"Name"}</th>
                    <th scope="col">{"Age"}</th>
                    <th scope="col">{"Country"}</th>
                    <th scope="col">{"Role"}</th>
                    <th scope="col">{"Experience"}</th>
                    <th scope="col">{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.employees.iter().map(|employee| build_row(employee, link)) }
            </tbody>
        </table>
    }
}

fn build_row(employee: &Employee, link: &Scope<EmployeesComponent>) -> Html {
    let on_edit = {
        let employee = employee.clone();
        link.callback(move |_| Msg::Edit(employee.clone()))
    };
    let on_delete = {
        let employee = employee.clone();
        link.callback(move |_| Msg::Delete(employee.clone()))
    };

    html! {
        <tr key={employee.id.to_string()}>
            <th>{ employee.id.to_string() }</th>
            <td>{ employee.name.clone() }</td>
            <td>{ employee.age.to_string() }</td>
            <td>{ employee.country.clone() }</td>
            <td>{ employee.role.clone() }</td>
            <td>{ employee.years_experience.to_string() }</td>
            <td>
                <div class="btn-group" role="group" aria-label="Actions">
                    <button type="button" class="btn btn-info" onclick={on_edit}>{"Edit"}</button>
                    <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </td>
        </tr>
    }
}
