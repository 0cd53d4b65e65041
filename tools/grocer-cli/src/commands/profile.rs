//! Profile form validation and submission.

use anyhow::{bail, Result};
use grocer_commerce::ids::UserId;
use grocer_commerce::profile::{AddressFields, PhoneFields, ProfileForm, Role};
use grocer_data::AuthToken;
use grocer_views::{ProfileView, Session, ViewError};
use serde_json::json;

use super::{connect, view_context, ProfileArgs};
use crate::context::Context;

/// Run the profile command.
pub async fn run(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let form = ProfileForm {
        phone: PhoneFields {
            phone_1: args.phone,
            phone_2: args.phone2.unwrap_or_default(),
        },
        address: AddressFields {
            city: args.city,
            street: args.street,
            house_number: args.house.unwrap_or_default(),
        },
    };

    let validated = match form.validate() {
        Ok(validated) => validated,
        Err(errors) => {
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "valid": false, "errors": errors }));
            } else {
                for error in &errors {
                    ctx.output.error(&error.to_string());
                }
            }
            bail!("Profile has {} invalid field(s)", errors.len());
        }
    };

    let (Some(user), Some(token)) = (args.user, args.token) else {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "valid": true, "profile": validated }));
        } else {
            ctx.output.success("Profile is valid");
        }
        return Ok(());
    };

    let api = connect(args.fixture.as_deref(), ctx)?;
    let session = Session::signed_in(AuthToken::new(token), UserId::new(user), Role::Customer);
    let mut view = ProfileView::new(view_context(api, session, ctx));

    match view.submit(validated.into_form()).await {
        Ok(()) => {
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "valid": true, "submitted": true }));
            } else {
                ctx.output.success("Profile updated");
            }
            Ok(())
        }
        Err(ViewError::Service(e)) => bail!("Profile update failed: {}", e),
        Err(e) => Err(e.into()),
    }
}
