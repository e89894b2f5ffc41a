use ride_tracker_lib::ride::RideSummary;
use ride_tracker_lib::vehicle::display_name_for;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub summary: Option<RideSummary>,
}

/// Trip statistics for the last completed ride. Hidden until a ride ends
/// and replaced wholesale by the next one.
#[function_component]
pub fn ResultsPanel(props: &Props) -> Html {
    html! {
        if let Some(summary) = &props.summary {
            <div class="results component-container">
                <h2>{ "Ride Summary" }</h2>
                <label>{ format!("Vehicle: {}", display_name_for(&summary.vehicle)) }</label>
                <label>{ format!("Fuel Filled: {}L (₹{})", summary.fuel_in_liters, summary.fuel_filled_rs) }</label>
                <label>{ format!("Mileage: {} km/L", summary.mileage) }</label>
                <label>{ format!("Fuel Used: {}L", summary.fuel_used) }</label>
                <label>{ format!("Fuel Remaining: {}L", summary.fuel_left) }</label>
                <label>{ format!("Fuel Level: {}%", summary.fuel_percent) }</label>
                <p class={classes!("font-bold", summary.fuel_level().alert_class())}>
                    { summary.alert.clone() }
                </p>
            </div>
        }
    }
}
