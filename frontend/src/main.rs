use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use ride_tracker_lib::chat::ChatMessage;
use ride_tracker_lib::ride::{RideSummary, StartRideRequest, StartRideResponse, validate_fuel_amount};
use ride_tracker_lib::vehicle::VehicleId;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::notification::NotificationBar;
use crate::components::results_panel::ResultsPanel;
use crate::components::ride_panel::RidePanel;
use crate::notify::{NOTIFICATION_HIDE_MS, Notification, Severity};
use crate::session::RideSession;

mod api;
mod components;
mod notify;
mod session;

const CHAT_APOLOGY: &str = "Sorry, I couldn't process your request right now. Please try again.";

enum MainMsg {
    VehicleChanged(String),
    CapacityLoaded { vehicle: VehicleId, capacity: f64 },
    CapacityFailed,
    FuelChanged(String),
    StartRide,
    RideStarted {
        vehicle: VehicleId,
        fuel_rs: f64,
        response: StartRideResponse,
    },
    StartFailed(String),
    EndRide,
    RideEnded(Box<RideSummary>),
    EndFailed(String),
    ChatChanged(String),
    SendChat,
    ChatAnswered(String),
    ChatFailed,
    HideNotification,
}

struct Model {
    session: RideSession,
    vehicle: Option<VehicleId>,
    fuel: String,
    summary: Option<RideSummary>,
    chat_log: Vec<ChatMessage>,
    chat_input: String,
    notification: Option<Notification>,
    hide_timer: Option<Timeout>,
    start_busy: bool,
    end_busy: bool,
    chat_busy: bool,
}

impl Model {
    fn notify(&mut self, ctx: &Context<Self>, text: impl Into<String>, severity: Severity) {
        self.notification = Some(Notification::new(text, severity));
        let link = ctx.link().clone();
        // Replacing the handle drops the pending timeout, so an older
        // timer can never hide a newer notification early.
        self.hide_timer = Some(Timeout::new(NOTIFICATION_HIDE_MS, move || {
            link.send_message(MainMsg::HideNotification);
        }));
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: RideSession::new(),
            vehicle: None,
            fuel: String::new(),
            summary: None,
            chat_log: Vec::new(),
            chat_input: String::new(),
            notification: None,
            hide_timer: None,
            start_busy: false,
            end_busy: false,
            chat_busy: false,
        };
        model.notify(
            ctx,
            "Welcome! Select a vehicle and add fuel to start tracking your ride.",
            Severity::Info,
        );
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::VehicleChanged(raw) => {
                if raw.is_empty() {
                    self.vehicle = None;
                    return true;
                }
                match raw.parse::<VehicleId>() {
                    Ok(vehicle) => {
                        self.vehicle = Some(vehicle);
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            match api::get_vehicle_capacity(vehicle).await {
                                Ok(response) => link.send_message(MainMsg::CapacityLoaded {
                                    vehicle,
                                    capacity: response.capacity,
                                }),
                                Err(err) => {
                                    error!(format!("Capacity lookup failed: {err}"));
                                    link.send_message(MainMsg::CapacityFailed);
                                }
                            }
                        });
                    }
                    Err(err) => {
                        error!(format!("Selector produced {err}"));
                        self.vehicle = None;
                    }
                }
                true
            }
            MainMsg::CapacityLoaded { vehicle, capacity } => {
                self.notify(
                    ctx,
                    format!(
                        "{} selected. Tank capacity: {}L",
                        vehicle.display_name(),
                        capacity
                    ),
                    Severity::Success,
                );
                true
            }
            MainMsg::CapacityFailed => {
                self.notify(ctx, "Could not fetch vehicle capacity.", Severity::Error);
                true
            }
            MainMsg::FuelChanged(value) => {
                self.fuel = value;
                true
            }
            MainMsg::StartRide => {
                let Some(vehicle) = self.vehicle else {
                    self.notify(ctx, "Please select a vehicle first.", Severity::Error);
                    return true;
                };
                let fuel_rs = match validate_fuel_amount(&self.fuel) {
                    Ok(amount) => amount,
                    Err(err) => {
                        info!(format!("Rejected fuel input: {err}"));
                        self.notify(ctx, "Please enter a valid fuel amount.", Severity::Error);
                        return true;
                    }
                };
                self.start_busy = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = StartRideRequest::new(vehicle, fuel_rs);
                    match api::start_ride(&request).await {
                        Ok(response) => link.send_message(MainMsg::RideStarted {
                            vehicle,
                            fuel_rs,
                            response,
                        }),
                        Err(err) => {
                            error!(format!("Start ride failed: {err}"));
                            link.send_message(MainMsg::StartFailed(err.to_string()));
                        }
                    }
                });
                true
            }
            MainMsg::RideStarted {
                vehicle,
                fuel_rs,
                response,
            } => {
                self.session.begin();
                self.start_busy = false;
                // Hide results from the previous ride.
                self.summary = None;
                self.notify(
                    ctx,
                    format!(
                        "Ride started! Filled {}L (₹{}) in your {}.",
                        response.fuel_in_liters,
                        fuel_rs,
                        vehicle.display_name()
                    ),
                    Severity::Success,
                );
                true
            }
            MainMsg::StartFailed(message) => {
                self.start_busy = false;
                self.notify(ctx, message, Severity::Error);
                true
            }
            MainMsg::EndRide => {
                if !self.session.is_active() {
                    self.notify(
                        ctx,
                        "No active ride found. Please start a ride first.",
                        Severity::Error,
                    );
                    return true;
                }
                self.end_busy = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::end_ride().await {
                        Ok(summary) => link.send_message(MainMsg::RideEnded(Box::new(summary))),
                        Err(err) => {
                            error!(format!("End ride failed: {err}"));
                            link.send_message(MainMsg::EndFailed(err.to_string()));
                        }
                    }
                });
                true
            }
            MainMsg::RideEnded(summary) => {
                self.session.finish();
                self.end_busy = false;
                self.notify(
                    ctx,
                    format!(
                        "Ride completed! You traveled {}km with {} km/L mileage.",
                        summary.distance, summary.mileage
                    ),
                    Severity::Success,
                );
                self.summary = Some(*summary);
                true
            }
            MainMsg::EndFailed(message) => {
                self.end_busy = false;
                self.notify(ctx, message, Severity::Error);
                true
            }
            MainMsg::ChatChanged(value) => {
                self.chat_input = value;
                true
            }
            MainMsg::SendChat => {
                let query = self.chat_input.trim().to_string();
                if query.is_empty() {
                    return false;
                }
                self.chat_log.push(ChatMessage::user(query.clone()));
                self.chat_input.clear();
                self.chat_busy = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::chatbot(&query).await {
                        Ok(answer) => link.send_message(MainMsg::ChatAnswered(answer)),
                        Err(err) => {
                            // The user only ever sees the apology line.
                            error!(format!("Chatbot request failed: {err}"));
                            link.send_message(MainMsg::ChatFailed);
                        }
                    }
                });
                true
            }
            MainMsg::ChatAnswered(answer) => {
                self.chat_busy = false;
                self.chat_log.push(ChatMessage::bot(answer));
                true
            }
            MainMsg::ChatFailed => {
                self.chat_busy = false;
                self.chat_log.push(ChatMessage::bot(CHAT_APOLOGY));
                true
            }
            MainMsg::HideNotification => {
                self.notification = None;
                self.hide_timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app component-container">
                <h1>{ "Ride Tracker" }</h1>
                <NotificationBar notification={self.notification.clone()} />
                <RidePanel
                    selected={self.vehicle}
                    fuel={self.fuel.clone()}
                    ride_active={self.session.is_active()}
                    start_busy={self.start_busy}
                    end_busy={self.end_busy}
                    on_vehicle_change={link.callback(MainMsg::VehicleChanged)}
                    on_fuel_input={link.callback(MainMsg::FuelChanged)}
                    on_start={link.callback(|()| MainMsg::StartRide)}
                    on_end={link.callback(|()| MainMsg::EndRide)}
                />
                <ResultsPanel summary={self.summary.clone()} />
                <ChatPanel
                    log={self.chat_log.clone()}
                    input={self.chat_input.clone()}
                    busy={self.chat_busy}
                    on_input={link.callback(MainMsg::ChatChanged)}
                    on_send={link.callback(|()| MainMsg::SendChat)}
                />
            </div>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
