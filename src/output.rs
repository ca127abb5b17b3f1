//! Console Output
//!
//! Human-readable rendering of API results, help text and usage errors.
//! Every function writes to a caller-supplied writer so output can be
//! captured in tests.

use crate::api::products::{CreatedProduct, NewProduct, Product};
use crate::command::UsageError;
use serde_json::Value;
use std::io::{self, Write};

/// Printed after every product in list view
pub fn divider() -> String {
    "─".repeat(50)
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Iniciando Gestor de Productos TechLab...")?;
    writeln!(out)
}

/// Static usage text
pub fn help(out: &mut impl Write) -> io::Result<()> {
    const HELP: &str = "\
GESTOR DE PRODUCTOS - TECHLAB PROJECT

Comandos disponibles:

Obtener todos los productos:
  prodcli GET products

Obtener un producto específico:
  prodcli GET products/<productId>
  Ejemplo: prodcli GET products/15

Crear un nuevo producto:
  prodcli POST products <title> <price> <category>
  Ejemplo: prodcli POST products T-Shirt-Rex 300 remeras

Eliminar un producto:
  prodcli DELETE products/<productId>
  Ejemplo: prodcli DELETE products/7

Usa cualquier comando para comenzar!";

    writeln!(out, "{}", HELP)
}

/// Report a usage error: message on `err`, hint and help on `out`
pub fn usage_error(out: &mut impl Write, err: &mut impl Write, error: &UsageError) -> io::Result<()> {
    writeln!(err, "{}", error)?;
    if let Some(hint) = error.hint() {
        writeln!(out, "{}", hint)?;
    }
    if error.shows_help() {
        help(out)?;
    }
    Ok(())
}

pub fn fetching_all(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Obteniendo todos los productos...")?;
    writeln!(out)
}

/// One summary block per product, each followed by the divider
pub fn product_list(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    writeln!(out, "Total de productos encontrados: {}", products.len())?;
    writeln!(out)?;

    let divider = divider();
    for product in products {
        writeln!(out, "ID: {}", product.id)?;
        writeln!(out, "Título: {}", product.title)?;
        writeln!(out, "Precio: ${}", product.price)?;
        writeln!(out, "Categoría: {}", product.category)?;
        writeln!(
            out,
            "Rating: {} ({} reseñas)",
            product.rating.rate, product.rating.count
        )?;
        writeln!(out, "{}", divider)?;
    }
    Ok(())
}

pub fn fetching_one(out: &mut impl Write, id: u64) -> io::Result<()> {
    writeln!(out, "Buscando producto con ID: {}...", id)?;
    writeln!(out)
}

pub fn product_detail(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "Producto encontrado:")?;
    writeln!(out)?;
    writeln!(out, "ID: {}", product.id)?;
    writeln!(out, "Título: {}", product.title)?;
    writeln!(out, "Precio: ${}", product.price)?;
    writeln!(out, "Categoría: {}", product.category)?;
    writeln!(out, "Descripción: {}", product.description)?;
    writeln!(out, "Imagen: {}", product.image)?;
    writeln!(
        out,
        "Rating: {} ({} reseñas)",
        product.rating.rate, product.rating.count
    )
}

pub fn creating(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Creando nuevo producto...")?;
    writeln!(out)
}

/// Server-assigned id plus the payload, preferring server values
pub fn product_created(
    out: &mut impl Write,
    created: &CreatedProduct,
    submitted: &NewProduct,
) -> io::Result<()> {
    let shown = created.or_submitted(submitted);
    let id = created
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    writeln!(out, "Producto creado exitosamente:")?;
    writeln!(out)?;
    writeln!(out, "ID: {}", id)?;
    writeln!(out, "Título: {}", shown.title)?;
    writeln!(out, "Precio: ${}", shown.price)?;
    writeln!(out, "Categoría: {}", shown.category)?;
    writeln!(out, "Descripción: {}", shown.description)
}

pub fn deleting(out: &mut impl Write, id: u64) -> io::Result<()> {
    writeln!(out, "Eliminando producto con ID: {}...", id)?;
    writeln!(out)
}

pub fn product_deleted(out: &mut impl Write, id: u64, response: &Value) -> io::Result<()> {
    let raw = serde_json::to_string_pretty(response).map_err(io::Error::other)?;

    writeln!(out, "Producto eliminado exitosamente:")?;
    writeln!(out, "ID eliminado: {}", id)?;
    writeln!(out, "Respuesta del servidor: {}", raw)
}
