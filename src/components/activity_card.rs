//! Card for a single activity with its participant roster.
//!
//! Register and remove controls are only present when the card was built for
//! an authenticated session; the server remains the authority either way.

use leptos::prelude::*;

use crate::util::view_model::{CardView, NO_PARTICIPANTS_TEXT, ParticipantRow};

#[component]
pub fn ActivityCard(
    card: CardView,
    /// Receives the activity name.
    on_register: Callback<String>,
    /// Receives `(activity name, participant email)`.
    on_unregister: Callback<(String, String)>,
) -> impl IntoView {
    let availability = card.availability_text();
    let CardView { name, description, schedule, participants, can_register, .. } = card;

    let roster = if participants.is_empty() {
        view! {
            <p>
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </p>
        }
        .into_any()
    } else {
        let rows = participants
            .into_iter()
            .map(|ParticipantRow { email, removable }| {
                let activity = name.clone();
                let label = email.clone();
                view! {
                    <li>
                        <span class="participant-email">{label}</span>
                        {removable
                            .then(move || {
                                view! {
                                    <button
                                        class="delete-btn"
                                        title="Unregister"
                                        aria-label="Unregister"
                                        on:click=move |_| on_unregister.run((activity.clone(), email.clone()))
                                    >
                                        "❌"
                                    </button>
                                }
                            })}
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        }
        .into_any()
    };

    let register = can_register.then(|| {
        let activity = name.clone();
        view! {
            <button class="register-btn" on:click=move |_| on_register.run(activity.clone())>
                "Register"
            </button>
        }
    });

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{roster}</div>
            {register}
        </div>
    }
}
