use yew::prelude::*;

use crate::api::ApiResult;

/// Fetch state of a panel
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    /// Settles a finished request. An expired session is reported through
    /// `on_expired` so the router can send the user back to login.
    pub fn settle(result: ApiResult<T>, on_expired: &Callback<()>) -> Self {
        match result {
            ApiResult::Ok(value) => Loadable::Ready(value),
            ApiResult::Unauthorized => {
                on_expired.emit(());
                Loadable::Failed("Session expired. Please log in again.".to_string())
            }
            other => Loadable::Failed(
                other
                    .error_message()
                    .unwrap_or_else(|| "API request failed".to_string()),
            ),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Spinner or error box for the non-ready states; `None` when ready
pub fn render_pending<T>(state: &Loadable<T>) -> Option<Html> {
    match state {
        Loadable::Loading => Some(html! {
            <div class="flex justify-center py-12">
                <div class="animate-spin h-8 w-8 rounded-full border-4 border-orange-500 border-t-transparent"></div>
            </div>
        }),
        Loadable::Failed(message) => Some(html! {
            <div class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-md p-4">
                {message}
            </div>
        }),
        Loadable::Ready(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_unauthorized_reports_expiry() {
        let expired = Rc::new(Cell::new(false));
        let on_expired = {
            let expired = expired.clone();
            Callback::from(move |_| expired.set(true))
        };

        let state: Loadable<u32> = Loadable::settle(ApiResult::Unauthorized, &on_expired);
        assert!(expired.get());
        assert!(matches!(state, Loadable::Failed(_)));
    }

    #[test]
    fn test_rejected_keeps_backend_message() {
        let state: Loadable<u32> = Loadable::settle(
            ApiResult::Rejected {
                status: 400,
                message: "GA4 not connected".to_string(),
            },
            &Callback::noop(),
        );
        assert_eq!(state, Loadable::Failed("GA4 not connected".to_string()));
        assert_eq!(Loadable::settle(ApiResult::Ok(3), &Callback::noop()), Loadable::Ready(3));
    }
}
