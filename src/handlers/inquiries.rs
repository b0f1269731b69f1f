// src/handlers/inquiries.rs
//
// Owner inquiry and contact forms. Both render their own result in place.

use crate::app::App;
use crate::forms::inquiry::{ContactForm, OwnerInquiryForm};
use crate::forms::FieldErrors;
use crate::handlers::Ctx;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::inquiries::{
    contact_page, owners_page, FormState, OwnerLinks, CONTACT_FAILURE, OWNER_FAILURE,
};

fn owner_links(app: &App) -> OwnerLinks {
    OwnerLinks {
        list_property: app.api.list_property_url(),
        owner_signup: app.api.owner_signup_url(),
    }
}

pub fn owners(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    html_response(owners_page(
        current.as_ref().map(|c| &c.user),
        &FormState::blank(),
        &owner_links(app),
    ))
}

pub fn submit_owner(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    let user = current.as_ref().map(|c| &c.user);
    let form = OwnerInquiryForm::from_form(&ctx.form);

    let state = match form.validate() {
        Err(errors) => FormState::Open { form, errors, error: None },
        Ok(inquiry) => match app.api.submit_owner_inquiry(&inquiry) {
            Ok(resp) => {
                tracing::info!(inquiry = %resp.inquiry_id, city = ?inquiry.city, "owner inquiry received");
                FormState::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "owner inquiry failed");
                FormState::Open {
                    form,
                    errors: FieldErrors::new(),
                    error: Some(e.user_message(OWNER_FAILURE)),
                }
            }
        },
    };
    html_response(owners_page(user, &state, &owner_links(app)))
}

pub fn contact(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    html_response(contact_page(current.as_ref().map(|c| &c.user), &FormState::blank()))
}

pub fn submit_contact(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    let user = current.as_ref().map(|c| &c.user);
    let form = ContactForm::from_form(&ctx.form);

    let state = match form.validate() {
        Err(errors) => FormState::Open { form, errors, error: None },
        Ok(inquiry) => match app.api.submit_contact_inquiry(&inquiry) {
            Ok(resp) => {
                tracing::info!(inquiry = %resp.public_id, subject = %inquiry.subject, "contact message received");
                FormState::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message failed");
                FormState::Open {
                    form,
                    errors: FieldErrors::new(),
                    error: Some(e.user_message(CONTACT_FAILURE)),
                }
            }
        },
    };
    html_response(contact_page(user, &state))
}
