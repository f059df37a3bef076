//! Command dispatch: parse, run against the catalog, print

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::{output, CliResult};
use crate::config::Settings;
use crate::domain::{Command, NewProductArgs, ProductId};
use crate::infrastructure::di::ServiceContainer;

pub const USAGE_BANNER: &str = "\
Uso: storectl <comando> [opciones]
Comandos disponibles:
  GET products                             - Consulta todos los productos y muestra id, title, price
  GET products/<productId>                 - Consulta un producto específico por ID y muestra id, title, price
  POST products <title> <price> <category> - Crea un nuevo producto
  DELETE products/<productId>              - Elimina un producto por ID";

pub const CREATE_FAILED: &str = "No se pudo crear el producto.";

/// Number of positional arguments `POST products` consumes.
const CREATE_ARG_COUNT: usize = 3;

/// Entry point behind `main`: validates arguments, loads settings, runs the command.
///
/// Arguments are validated before settings are loaded or any client is built,
/// so malformed invocations never touch config files or the network.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let Some(name) = cli.command.as_deref() else {
        return output::line(out, USAGE_BANNER);
    };
    let command = Command::parse(name, cli.resource.as_deref(), &cli.args)?;
    if matches!(command, Command::CreateProduct(_)) && cli.args.len() > CREATE_ARG_COUNT {
        output::warning(&format!(
            "ignoring extra arguments: {}",
            cli.args[CREATE_ARG_COUNT..].join(" ")
        ));
    }

    let settings = Settings::load(cli.config.as_deref())?.with_base_url(cli.base_url.as_deref());
    debug!("run: base_url={}", settings.base_url);
    let container = ServiceContainer::new(settings)?;

    execute_command(&command, &container, out)
}

/// Run one parsed command. Request failures are reported on stderr and
/// answered with the command's fallback; they are not returned as errors.
pub fn execute_command<W: Write>(
    command: &Command,
    container: &ServiceContainer,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Command::ListProducts => _list(container, out),
        Command::GetProduct { id } => _get(container, *id, out),
        Command::CreateProduct(args) => _create(container, args, out),
        Command::DeleteProduct { id } => _delete(container, *id, out),
    }
}

#[instrument(skip_all)]
fn _list<W: Write>(container: &ServiceContainer, out: &mut W) -> CliResult<()> {
    output::line(out, "Consultando todos los productos...")?;
    match container.catalog.list_products() {
        Ok(Some(products)) => output::json(out, &products),
        Ok(None) => Ok(()),
        Err(e) => {
            report(&e);
            Ok(())
        }
    }
}

#[instrument(skip(container, out))]
fn _get<W: Write>(container: &ServiceContainer, id: ProductId, out: &mut W) -> CliResult<()> {
    output::line(out, &format!("Consultando producto con ID: {id}..."))?;
    match container.catalog.get_product(id) {
        Ok(Some(product)) => output::json(out, &product),
        Ok(None) => Ok(()),
        Err(e) => {
            report(&e);
            Ok(())
        }
    }
}

#[instrument(skip(container, out))]
fn _create<W: Write>(
    container: &ServiceContainer,
    args: &NewProductArgs,
    out: &mut W,
) -> CliResult<()> {
    output::line(
        out,
        &format!(
            "Creando producto: {}, Precio: {}, Categoría: {}...",
            args.title,
            output::number(args.price),
            args.category
        ),
    )?;
    match container.catalog.create_product(args.clone()) {
        Ok(Some(created)) => {
            output::line(out, "Producto creado exitosamente:")?;
            output::json(out, &created)
        }
        Ok(None) => output::line(out, CREATE_FAILED),
        Err(e) => {
            report(&e);
            output::line(out, CREATE_FAILED)
        }
    }
}

#[instrument(skip(container, out))]
fn _delete<W: Write>(container: &ServiceContainer, id: ProductId, out: &mut W) -> CliResult<()> {
    output::line(out, &format!("Eliminando producto con ID: {id}..."))?;
    match container.catalog.delete_product(id) {
        Ok(Some(product)) => {
            output::line(out, "Producto eliminado exitosamente:")?;
            output::json(out, &product)
        }
        Ok(None) => Ok(()),
        Err(e) => {
            report(&e);
            Ok(())
        }
    }
}

/// One diagnostic line per failed request.
fn report(e: &ApplicationError) {
    debug!("request failed: {:?}", e);
    output::error(e);
}
