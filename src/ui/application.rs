// src/ui/application.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::widgets::{self, card, key_values, stat};
use crate::utils::{format_aud, format_date, format_thousands};

pub fn show_application(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(application) = state.application.current().cloned() else {
        card(ui, "Application Not Submitted", |ui| {
            ui.label("The borrowers have not submitted their application yet.");
            ui.add_space(8.0);
            if ui.button("Submit Application").clicked() {
                state.application.submit();
            }
        });
        return;
    };

    ui.horizontal(|ui| {
        stat(ui, application.status.clone(), "Status", widgets::WARNING);
        ui.add_space(24.0);
        stat(ui, application.id.clone(), "Application ID", widgets::PRIMARY);
        ui.add_space(24.0);
        stat(ui, format_date(application.submitted_on), "Submitted", widgets::MUTED);
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        let borrower = &application.borrower;
        card(&mut columns[0], "Borrower Profile", |ui| {
            key_values(ui, "borrower_profile", &[
                ("Name", borrower.name.clone()),
                ("Ages", borrower.ages.clone()),
                ("Annual Income", format_aud(borrower.annual_income)),
                ("Employment", borrower.employment_status.clone()),
                ("Mortgage Balance", format_aud(borrower.mortgage_balance)),
                ("Email", borrower.email.clone()),
                ("Phone", borrower.phone.clone()),
            ]);
        });

        let property = &application.property;
        card(&mut columns[1], "Property Details", |ui| {
            key_values(ui, "property_details", &[
                ("Address", property.address.clone()),
                ("Locality", property.locality()),
                ("Type", property.property_type.clone()),
                ("Land Size", format!("{} sqm", format_thousands(property.land_size_sqm as u64))),
                ("Home Size", format!("{} sqm", format_thousands(property.home_size_sqm as u64))),
                ("Bedrooms / Bathrooms", format!("{} / {}", property.bedrooms, property.bathrooms)),
                ("Year Built", property.year_built.to_string()),
                ("AVM Value", format_aud(property.avm_value)),
            ]);
        });
    });

    ui.add_space(12.0);

    let loan = &application.loan;
    card(ui, "Platform Loan Structure", |ui| {
        ui.horizontal_wrapped(|ui| {
            stat(ui, format_aud(loan.amount), "Loan Amount", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.2}%", loan.ltv), "LTV", widgets::SECONDARY);
            ui.add_space(24.0);
            stat(ui, format!("{} years", loan.term_years), "Term", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.1}% simple", loan.interest_rate), "Interest", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.1}%", loan.origination_fee), "Origination Fee", widgets::PRIMARY);
            ui.add_space(24.0);
            let payment = if loan.monthly_payment == 0 {
                "None".to_string()
            } else {
                format_aud(loan.monthly_payment)
            };
            stat(ui, payment, "Monthly Payment", widgets::POSITIVE);
        });
        ui.add_space(6.0);
        ui.label(format!("Purpose: {}", loan.purpose));
    });
}
