//! Profile completion page.

use grocer_commerce::profile::{ProfileForm, UserProfile};
use grocer_data::StorefrontApi;

use crate::context::ViewContext;
use crate::error::{ViewError, ViewResult};
use crate::guard::FlagGuard;
use crate::state::LoadState;

/// State for one mounted profile page.
pub struct ProfileView<A> {
    ctx: ViewContext<A>,
    user: Option<UserProfile>,
    form: ProfileForm,
    submitting: bool,
    state: LoadState,
}

impl<A: StorefrontApi> ProfileView<A> {
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            user: None,
            form: ProfileForm::default(),
            submitting: false,
            state: LoadState::Loading,
        }
    }

    /// Fetch the signed-in user and prefill the form from it.
    pub async fn load(&mut self) -> ViewResult<()> {
        let (token, user_id) = self.ctx.session.require_user()?;
        self.state = LoadState::Loading;

        match self.ctx.api.fetch_user(token, user_id).await {
            Ok(user) => {
                tracing::debug!(user = %user.id, "profile loaded");
                self.form = ProfileForm::from_user(&user);
                self.user = Some(user);
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load profile");
                self.ctx.notifier.error("Could not load your profile");
                self.state = LoadState::Failed;
                Err(e.into())
            }
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate `form` and, only if it passes, send it.
    ///
    /// Invalid forms return every failing field and make no call.
    pub async fn submit(&mut self, form: ProfileForm) -> ViewResult<()> {
        let validated = form.validate().map_err(ViewError::InvalidProfile)?;
        let (token, user_id) = self.ctx.session.require_user()?;

        let result = {
            let _submitting = FlagGuard::raise(&mut self.submitting);
            self.ctx.api.submit_profile(token, user_id, &validated).await
        };

        match result {
            Ok(()) => {
                tracing::info!(user = %user_id, "profile updated");
                self.form = validated.into_form();
                self.ctx.notifier.success("Profile updated");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user = %user_id, error = %e, "profile update failed");
                self.ctx.notifier.error("Could not update your profile");
                Err(e.into())
            }
        }
    }
}
