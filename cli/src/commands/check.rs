//! Check command - Validates one set of credentials.

use std::time::Duration;

use common::{AppError, AppResult, FormConfig};
use signup_form_lib::SignupForm;

use super::render_state;
use crate::args::CheckArgs;

/// Extra wait past the longest debounce so the last emission has propagated
const SETTLE_MARGIN: Duration = Duration::from_millis(50);

/// Execute the check command
pub async fn execute(args: CheckArgs, config: FormConfig) -> AppResult<()> {
    let mut form = SignupForm::spawn(config)?;

    form.set_username(args.username);
    form.set_password(args.password);
    form.set_confirmation(args.confirm);

    tokio::time::sleep(config.settle_time() + SETTLE_MARGIN).await;

    let state = form.state();
    println!("{}", render_state(&state, args.json)?);

    if !form.is_submit_enabled() {
        form.close();
        return Err(AppError::SubmitDisabled);
    }

    let confirmation = form.submit().await?;
    println!("{}", confirmation);

    form.close();
    Ok(())
}
