// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Builds the instruction sent to the text-generation provider.
///
/// The model is asked for a bare JSON array of `{ "nombre", "descripcion" }`
/// objects so the output can be fed directly into the response parser.
pub fn build_crops_prompt(location_text: &str) -> String {
    indoc::formatdoc!(
        r#"
        Eres un agrónomo experto. Enumera los cultivos más comunes (entre 5 y 7) que se
        producen en la siguiente ubicación: "{location}".

        Responde ÚNICAMENTE con un arreglo JSON válido de objetos con la forma:
        [{{"nombre": "Nombre del cultivo", "descripcion": "Descripción breve del cultivo"}}]

        Si no hay cultivos relevantes para esa ubicación, responde con un arreglo vacío: [].
        No incluyas formato Markdown, bloques de código ni texto adicional.
        "#,
        location = location_text.trim()
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
