use ride_tracker_lib::vehicle::VehicleId;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub selected: Option<VehicleId>,
    pub fuel: String,
    pub ride_active: bool,
    pub start_busy: bool,
    pub end_busy: bool,
    pub on_vehicle_change: Callback<String>,
    pub on_fuel_input: Callback<String>,
    pub on_start: Callback<()>,
    pub on_end: Callback<()>,
}

#[function_component]
pub fn RidePanel(props: &Props) -> Html {
    let on_change = {
        let cb = props.on_vehicle_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    let on_fuel = {
        let cb = props.on_fuel_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_end = {
        let cb = props.on_end.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    // Button enablement mirrors the session state; busy only adds the
    // loading style while a request is in flight.
    let start_disabled = props.ride_active || props.start_busy;
    let end_disabled = !props.ride_active || props.end_busy;

    html! {
        <div class="ride-panel component-container">
            <select onchange={on_change}>
                <option value="" selected={props.selected.is_none()}>
                    { "Select your vehicle" }
                </option>
                { for VehicleId::ALL.iter().map(|vehicle| html! {
                    <option
                        value={vehicle.as_str()}
                        selected={props.selected == Some(*vehicle)}
                    >
                        { vehicle.display_name() }
                    </option>
                }) }
            </select>
            <input
                type="number"
                min="1"
                placeholder="Fuel amount (₹)"
                value={props.fuel.clone()}
                oninput={on_fuel}
            />
            <button
                class={classes!(props.start_busy.then_some("loading"))}
                disabled={start_disabled}
                onclick={on_start}
            >
                { "Start Ride" }
            </button>
            <button
                class={classes!(props.end_busy.then_some("loading"))}
                disabled={end_disabled}
                onclick={on_end}
            >
                { "End Ride" }
            </button>
        </div>
    }
}
