use std::fmt;

/// Importance of a catalog entry. Decides the default selection and whether
/// the user may deselect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Required,
    Recommended,
    Optional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Required => "required",
            Tier::Recommended => "recommended",
            Tier::Optional => "optional",
        }
    }

    /// Whether a fresh selection session starts with this entry checked.
    pub fn preselected(&self) -> bool {
        matches!(self, Tier::Required | Tier::Recommended)
    }

    pub fn is_forced(&self) -> bool {
        *self == Tier::Required
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One downloadable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// File name, both on the hub and on disk.
    pub name: &'static str,
    /// HuggingFace `resolve` URL of the folder holding the file.
    pub location: &'static str,
    /// Folder under the local root the file lands in.
    pub destination: &'static str,
    pub tier: Tier,
}

impl Descriptor {
    pub const fn new(
        name: &'static str,
        location: &'static str,
        destination: &'static str,
        tier: Tier,
    ) -> Self {
        Self {
            name,
            location,
            destination,
            tier,
        }
    }
}

const SDXL_BASE: &str = "https://huggingface.co/stabilityai/stable-diffusion-xl-base-1.0/resolve/main/";
const SDXL_REFINER: &str =
    "https://huggingface.co/stabilityai/stable-diffusion-xl-refiner-1.0/resolve/main/";
const SDXL_VAE: &str = "https://huggingface.co/madebyollin/sdxl-vae-fp16-fix/resolve/main/";
const UPSCALERS: &str = "https://huggingface.co/uwg/upscaler/resolve/main/ESRGAN/";
const ANNOTATORS: &str = "https://huggingface.co/lllyasviel/Annotators/resolve/main/";
const CONTROL_LORA_REVISION: &str =
    "https://huggingface.co/stabilityai/control-lora/resolve/main/revision/";
const CONTROL_LORA_RANK256: &str =
    "https://huggingface.co/stabilityai/control-lora/resolve/main/control-LoRAs-rank256/";

/// The SDXL model set, laid out for a ComfyUI `models` folder.
pub const CATALOG: &[Descriptor] = &[
    Descriptor::new("sd_xl_base_1.0_0.9vae.safetensors", SDXL_BASE, "checkpoints", Tier::Required),
    Descriptor::new("sd_xl_refiner_1.0_0.9vae.safetensors", SDXL_REFINER, "checkpoints", Tier::Recommended),
    Descriptor::new("sdxl_vae.safetensors", SDXL_VAE, "vae", Tier::Optional),
    Descriptor::new("sd_xl_offset_example-lora_1.0.safetensors", SDXL_BASE, "loras", Tier::Optional),
    Descriptor::new("4x-UltraSharp.pth", UPSCALERS, "upscale_models", Tier::Recommended),
    Descriptor::new("4x_NMKD-Siax_200k.pth", UPSCALERS, "upscale_models", Tier::Recommended),
    Descriptor::new("4x_Nickelback_70000G.pth", UPSCALERS, "upscale_models", Tier::Recommended),
    Descriptor::new("1x-ITF-SkinDiffDetail-Lite-v1.pth", UPSCALERS, "upscale_models", Tier::Optional),
    Descriptor::new("ControlNetHED.pth", ANNOTATORS, "annotators", Tier::Required),
    Descriptor::new("res101.pth", ANNOTATORS, "annotators", Tier::Required),
    Descriptor::new("clip_vision_g.safetensors", CONTROL_LORA_REVISION, "clip_vision", Tier::Recommended),
    Descriptor::new("control-lora-canny-rank256.safetensors", CONTROL_LORA_RANK256, "controlnet", Tier::Recommended),
    Descriptor::new("control-lora-depth-rank256.safetensors", CONTROL_LORA_RANK256, "controlnet", Tier::Recommended),
    Descriptor::new("control-lora-recolor-rank256.safetensors", CONTROL_LORA_RANK256, "controlnet", Tier::Recommended),
    Descriptor::new("control-lora-sketch-rank256.safetensors", CONTROL_LORA_RANK256, "controlnet", Tier::Recommended),
];
