use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Staff client for the order api
#[derive(Parser, Debug)]
#[command(name = "omar-order-api")]
#[command(about = "client cli used by restaurant staffs to interact with the order api", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOST, help = "Base url of the order api")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// check the api is up
    Health,
    /// order related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// submit a new order
    #[command(arg_required_else_help = true)]
    Submit {
        #[arg(long = "item", help = "Menu item and quantity, repeatable.", value_name = "NAME=QTY", value_parser = parse_item, num_args = 1.., required = true)]
        items: Vec<OrderItem>,
        #[arg(long, help = "Name of the customer placing the order.")]
        customer: Option<String>,
    },
    /// list every submitted order
    List,
}

const DEFAULT_HOST: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize)]
struct OrderItem {
    name: String,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct Customer {
    name: String,
}

#[derive(Debug, Serialize)]
struct SubmitOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<Customer>,
    items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize)]
struct SubmitOrderResponse {
    order_id: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Order {
    id: u64,
    data: Value,
}

fn parse_item(s: &str) -> Result<OrderItem, String> {
    let (name, qty) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing item name in `{s}`"));
    }
    let quantity = qty
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| format!("quantity must be a positive integer in `{s}`"))?;
    Ok(OrderItem {
        name: name.to_string(),
        quantity,
    })
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');
    let client = Client::new();

    match args.command {
        Commands::Health => {
            let res = client.get(format!("{}/", host)).send().await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<HealthResponse>().await?;
                    println!("{}", res.message);
                },
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                },
            }
        },
        Commands::Order(order) => {
            match order.command {
                OrderCmds::Submit { items, customer } => {
                    println!("submitting order with {} item(s)", items.len());
                    let res = client
                        .post(format!("{}/api/order", host))
                        .json(&SubmitOrderRequest {
                            customer: customer.map(|name| Customer { name }),
                            items,
                        })
                        .send()
                        .await?;
                    match res.status() {
                        StatusCode::CREATED => {
                            let res = res.json::<SubmitOrderResponse>().await?;
                            println!("order accepted, order id = {}", res.order_id);
                        },
                        StatusCode::BAD_REQUEST => {
                            let res = res.json::<ErrorResponse>().await?;
                            println!("order rejected, {}", res.error);
                        },
                        unexpected => {
                            println!("got unexpected status code, {}", unexpected);
                        },
                    }
                },
                OrderCmds::List => {
                    let res = client.get(format!("{}/api/orders", host)).send().await?;
                    match res.status() {
                        StatusCode::OK => {
                            let orders = res.json::<Vec<Order>>().await?;
                            if orders.is_empty() {
                                println!("no orders yet");
                            }
                            for order in orders {
                                println!("#{} {}", order.id, order.data);
                            }
                        },
                        unexpected => {
                            println!("got unexpected status code, {}", unexpected);
                        },
                    }
                },
            }
        }
    };
    Ok(())
}
