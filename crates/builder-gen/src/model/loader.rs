use std::path::Path;

use anyhow::Result;

use crate::model::{ClassDecl, FieldDecl, Marker, MethodDecl, type_text};

const MARKER_NAME: &str = "builder_property";

/// Builds the declaration model for one parsed compilation unit. Structs
/// become classes, inherent impl blocks contribute their methods, and inline
/// modules extend the namespace path. Trait impls, non-inline modules, and
/// every other item kind are outside the model.
pub fn load_source(origin: &Path, file: &syn::File) -> Result<Vec<ClassDecl>> {
  collect_classes(&file.items, &[], origin)
}

fn collect_classes(items: &[syn::Item], module_path: &[String], origin: &Path) -> Result<Vec<ClassDecl>> {
  let mut classes = Vec::new();
  for item in items {
    match item {
      syn::Item::Struct(item_struct) => {
        classes.push(class_from_struct(item_struct, module_path, origin)?);
      }
      syn::Item::Mod(item_mod) => {
        if let Some((_, nested_items)) = &item_mod.content {
          let mut nested_path = module_path.to_vec();
          nested_path.push(item_mod.ident.to_string());
          classes.extend(collect_classes(nested_items, &nested_path, origin)?);
        }
      }
      _ => {}
    }
  }

  // Impls bind after the walk so a block may precede its struct in the file.
  for item in items {
    let syn::Item::Impl(item_impl) = item else {
      continue;
    };
    if item_impl.trait_.is_some() {
      continue;
    }
    let Some(target) = inherent_impl_target(item_impl) else {
      continue;
    };
    let found = classes
      .iter_mut()
      .find(|class| class.module_path == module_path && class.simple_name == target.as_str());
    if let Some(class) = found {
      class.methods.extend(methods_from_impl(item_impl)?);
    }
  }
  Ok(classes)
}

fn class_from_struct(item: &syn::ItemStruct, module_path: &[String], origin: &Path) -> Result<ClassDecl> {
  let marker = marker_from_attrs(&item.attrs)?;
  let mut fields = Vec::new();
  if let syn::Fields::Named(named) = &item.fields {
    for field in &named.named {
      let Some(ident) = &field.ident else {
        continue;
      };
      fields.push(FieldDecl {
        name: ident.to_string().into(),
        type_text: type_text::render_type_text(&field.ty),
        marker: marker_from_attrs(&field.attrs)?,
      });
    }
  }
  Ok(ClassDecl {
    simple_name: item.ident.to_string().into(),
    module_path: module_path.to_vec(),
    origin: origin.to_path_buf(),
    marker,
    fields,
    methods: Vec::new(),
  })
}

/// Self type of an inherent impl when it names a type declared in the same
/// scope, which is the only binding the model tracks.
fn inherent_impl_target(item_impl: &syn::ItemImpl) -> Option<String> {
  if let syn::Type::Path(type_path) = item_impl.self_ty.as_ref()
    && type_path.qself.is_none()
    && type_path.path.segments.len() == 1
  {
    let segment = type_path.path.segments.first()?;
    return Some(segment.ident.to_string());
  }
  None
}

fn methods_from_impl(item_impl: &syn::ItemImpl) -> Result<Vec<MethodDecl>> {
  let mut methods = Vec::new();
  for item in &item_impl.items {
    let syn::ImplItem::Fn(method) = item else {
      continue;
    };
    let param_types = method
      .sig
      .inputs
      .iter()
      .filter_map(|arg| match arg {
        syn::FnArg::Typed(pat_type) => Some(type_text::render_type_text(&pat_type.ty)),
        syn::FnArg::Receiver(_) => None,
      })
      .collect();
    methods.push(MethodDecl {
      name: method.sig.ident.to_string().into(),
      param_types,
      marker: marker_from_attrs(&method.attrs)?,
    });
  }
  Ok(methods)
}

/// First `builder_property` attribute, parsed. The bare path form carries an
/// empty override; the list form accepts exactly `setter_name = "..."`. Any
/// other shape fails the load.
fn marker_from_attrs(attrs: &[syn::Attribute]) -> Result<Option<Marker>> {
  for attr in attrs {
    if !attr.path().is_ident(MARKER_NAME) {
      continue;
    }
    return match &attr.meta {
      syn::Meta::Path(_) => Ok(Some(Marker::default())),
      syn::Meta::List(_) => {
        let mut setter_name = String::new();
        attr.parse_nested_meta(|meta| {
          if meta.path.is_ident("setter_name") {
            let value: syn::LitStr = meta.value()?.parse()?;
            setter_name = value.value();
            Ok(())
          } else {
            Err(meta.error("unsupported builder_property argument"))
          }
        })?;
        Ok(Some(Marker { setter_name }))
      }
      syn::Meta::NameValue(name_value) => {
        Err(syn::Error::new_spanned(name_value, "unsupported builder_property form").into())
      }
    };
  }
  Ok(None)
}
