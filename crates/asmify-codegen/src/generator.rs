//! The generation pass: type, method and body emission.
//!
//! One generator per pass owns all mutable state; the input graph is only
//! read. A method body moves through fixed phases: declare the body and
//! its non-default flags, bind locals, bind labels, then emit instructions
//! in original order.

use asmify_model::attributes::{METHOD_ATTRIBUTES, TYPE_ATTRIBUTES};
use asmify_model::utils::{format_bool, quote};
use asmify_model::{MethodBody, MethodDef, ModuleDef, TypeDef};

use crate::error::GenError;
use crate::flags::render_flags;
use crate::names::{MemberId, NameTable};
use crate::operand::encode_operand;
use crate::prepass::BodyNames;
use crate::script::{ScriptWriter, new_obj, path_get};
use crate::sig::render_method_sig;

/// Generate the builder script reconstructing `module`.
///
/// The script is returned only after the whole pass completes; a fatal
/// error discards the in-progress buffer.
pub fn generate(module: &ModuleDef) -> Result<String, GenError> {
    Generator::new(module).run()
}

struct Generator<'a> {
    module: &'a ModuleDef,
    names: NameTable,
    out: ScriptWriter,
}

impl<'a> Generator<'a> {
    fn new(module: &'a ModuleDef) -> Self {
        Self {
            module,
            names: NameTable::new(),
            out: ScriptWriter::new(),
        }
    }

    fn run(mut self) -> Result<String, GenError> {
        for (type_idx, ty) in self.module.types.iter().enumerate() {
            self.emit_type(type_idx, ty)?;
        }
        Ok(self.out.finish())
    }

    fn emit_type(&mut self, type_idx: usize, ty: &TypeDef) -> Result<(), GenError> {
        let prefix = self.names.allocate(MemberId::Type(type_idx), &ty.name);
        let attrs = render_flags("TypeAttributes", TYPE_ATTRIBUTES, ty.attributes);
        let ctor = new_obj(
            "TypeDefinition",
            &[&quote(&ty.namespace), &quote(&ty.name), &attrs],
        );
        self.out.decl(&prefix, &ctor);
        self.out.blank();

        for (method_idx, method) in ty.methods.iter().enumerate() {
            self.emit_method(type_idx, method_idx, method)?;
        }
        Ok(())
    }

    fn emit_method(
        &mut self,
        type_idx: usize,
        method_idx: usize,
        method: &MethodDef,
    ) -> Result<(), GenError> {
        let prefix = self
            .names
            .allocate(MemberId::Method(type_idx, method_idx), &method.name);
        let attrs = render_flags("MethodAttributes", METHOD_ATTRIBUTES, method.attributes);
        let sig = render_method_sig(method);
        let ctor = new_obj("MethodDefinition", &[&quote(&method.name), &attrs, &sig]);
        self.out.decl(&prefix, &ctor);
        self.out.blank();

        if let Some(body) = &method.body {
            self.emit_body(&prefix, body)?;
        }
        Ok(())
    }

    fn emit_body(&mut self, prefix: &str, body: &MethodBody) -> Result<(), GenError> {
        self.out
            .set(prefix, &["CilMethodBody"], &new_obj("CilMethodBody", &[prefix]));

        // Flags at their builder defaults are omitted to keep the script
        // minimal: InitializeLocals defaults to false, the build-time
        // checks to true.
        if body.init_locals {
            self.out
                .set(prefix, &["CilMethodBody", "InitializeLocals"], format_bool(true));
        }
        if !body.verify_labels {
            self.out.set(
                prefix,
                &["CilMethodBody", "VerifyLabelsOnBuild"],
                format_bool(false),
            );
        }
        if !body.compute_max_stack {
            self.out.set(
                prefix,
                &["CilMethodBody", "ComputeMaxStackOnBuild"],
                format_bool(false),
            );
        }
        self.out.blank();

        let names = BodyNames::collect(body, prefix)?;

        let cil = format!("{prefix}_cil");
        if !body.instructions.is_empty() {
            self.out
                .decl(&cil, &path_get(prefix, &["CilMethodBody", "Instructions"]));
            self.out.blank();
        }

        for local in &names.locals {
            self.out.decl(local, &new_obj("CilLocalVariable", &[]));
            self.out.stmt(&format!(
                "{}.Add({local})",
                path_get(prefix, &["CilMethodBody", "LocalVariables"])
            ));
        }
        if !names.locals.is_empty() {
            self.out.blank();
        }

        for label in names.labels.values() {
            self.out.decl(label, &new_obj("CilInstructionLabel", &[]));
        }
        if !names.labels.is_empty() {
            self.out.blank();
        }

        for (index, instr) in body.instructions.iter().enumerate() {
            let call = match encode_operand(instr, &names)? {
                Some(operand) => format!("{cil}.Add(CilOpCodes.{}, {operand})", instr.opcode),
                None => format!("{cil}.Add(CilOpCodes.{})", instr.opcode),
            };
            // An instruction that is itself a branch target becomes its
            // label's back-reference instead of a plain append.
            match names.labels.get(&index) {
                Some(label) => self.out.set(label, &["Instruction"], &call),
                None => self.out.stmt(&call),
            }
        }
        if !body.instructions.is_empty() {
            self.out.blank();
        }
        Ok(())
    }
}
