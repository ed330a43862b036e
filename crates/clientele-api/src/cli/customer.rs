//! Customer CLI commands: list, show, delete.

use anyhow::{Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use clientele_types::customer::{Customer, CustomerId};

use crate::state::AppState;

fn parse_id(id: &str) -> Result<CustomerId> {
    id.parse::<CustomerId>()
        .with_context(|| format!("'{id}' is not a valid customer ID"))
}

fn full_name(customer: &Customer) -> String {
    match &customer.middle_name {
        Some(middle) => format!("{} {} {}", customer.first_name, middle, customer.last_name),
        None => format!("{} {}", customer.first_name, customer.last_name),
    }
}

/// List all customers in a table, oldest first.
pub async fn list_customers(state: &AppState, json: bool) -> Result<()> {
    let customers = state.customer_service.list_customers().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&customers)?);
        return Ok(());
    }

    if customers.is_empty() {
        println!();
        println!(
            "  {} No customers found. Create one with: {}",
            style("i").blue().bold(),
            style("POST /customer/create").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Phone").fg(Color::White),
        Cell::new("Email").fg(Color::White),
        Cell::new("Address").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for customer in &customers {
        table.add_row(vec![
            Cell::new(full_name(customer)).fg(Color::Cyan),
            Cell::new(&customer.phone_number),
            Cell::new(&customer.email),
            Cell::new(&customer.address),
            Cell::new(customer.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} customer{}",
        style(customers.len()).bold(),
        if customers.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one customer's full record.
pub async fn show_customer(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let customer = state.customer_service.get_customer(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&customer)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(full_name(&customer)).cyan().bold());
    println!();
    println!("  {}", style("── Contact ──").dim());
    println!("  {}    {}", style("Phone:").bold(), customer.phone_number);
    println!("  {}    {}", style("Email:").bold(), customer.email);
    println!("  {}  {}", style("Address:").bold(), customer.address);
    println!();
    println!("  {}", style("── Record ──").dim());
    println!("  {}       {}", style("ID:").bold(), style(customer.id.to_string()).dim());
    println!(
        "  {}  {}",
        style("Created:").bold(),
        customer.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {}  {}",
        style("Updated:").bold(),
        customer.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}

/// Delete a customer. Deleting an unknown ID is not an error.
pub async fn delete_customer(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    state.customer_service.delete_customer(&id).await?;

    if json {
        println!("{}", serde_json::json!({"deleted": true, "id": id.to_string()}));
    } else {
        println!("  {} Customer {} deleted.", style("✓").red().bold(), style(id).dim());
    }

    Ok(())
}
