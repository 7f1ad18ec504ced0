use crate::ui::mvi::Reducer;

use super::intent::RegistrationIntent;
use super::state::RegistrationState;

/// Reducer for the registration form.
///
/// Applies the raw change, then derives every flag in one pass, so the
/// returned state never pairs new fields with stale flags.
pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Intent = RegistrationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut next = state;
        match intent {
            RegistrationIntent::SetName(name) => next.name = name,
            RegistrationIntent::SetEmail(email) => next.email = email,
            RegistrationIntent::SetPassword(password) => next.password = password,
            RegistrationIntent::SetGender(gender) => next.gender = gender,
            RegistrationIntent::Apply(update) => {
                if let Some(name) = update.name {
                    next.name = name;
                }
                if let Some(email) = update.email {
                    next.email = email;
                }
                if let Some(password) = update.password {
                    next.password = password;
                }
                if let Some(gender) = update.gender {
                    next.gender = gender;
                }
            }
            RegistrationIntent::Reset => return RegistrationState::with_rules(next.rules),
        }
        next.derive()
    }
}
