/// Embedded GLSL sources for the pipeline's programs.
///
/// The scene program rasterizes lit geometry into the dual-output capture
/// target; the blur and composite programs are quad passes. Sources are
/// compiled through [`GraphicsDevice::create_program`], so backends that do
/// not consume GLSL directly are expected to translate.

use std::sync::Arc;

use crate::device::{GraphicsDevice, Program, ProgramDesc};
use crate::error::Result;

/// Vertex shader for scene geometry (layout matches [`crate::mesh::Vertex`])
pub const SCENE_VERT: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aNormal;
layout (location = 2) in vec2 aTexCoords;
layout (location = 3) in vec3 aTangent;
layout (location = 4) in vec3 aBitangent;

out vec3 FragPos;
out vec3 Normal;
out vec2 TexCoords;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main() {
    FragPos = vec3(model * vec4(aPos, 1.0));
    Normal = mat3(transpose(inverse(model))) * aNormal;
    TexCoords = aTexCoords;
    gl_Position = projection * view * vec4(FragPos, 1.0);
}
"#;

/// Fragment shader for scene geometry: Blinn-Phong point light plus an
/// optional camera spotlight, with a second luminance-thresholded output.
pub const SCENE_FRAG: &str = r#"
#version 330 core
layout (location = 0) out vec4 FragColor;
layout (location = 1) out vec4 BrightColor;

in vec3 FragPos;
in vec3 Normal;
in vec2 TexCoords;

struct PointLight {
    vec3 position;
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;
    float constant;
    float linear;
    float quadratic;
};

struct SpotLight {
    bool enabled;
    float cutOff;
    float outerCutOff;
};

uniform sampler2D texture_diffuse1;
uniform sampler2D texture_specular1;
uniform vec3 viewPosition;
uniform vec3 viewDirection;
uniform float brightThreshold;
uniform PointLight pointLight;
uniform SpotLight spotLight;

void main() {
    vec3 albedo = texture(texture_diffuse1, TexCoords).rgb;
    float specularMask = texture(texture_specular1, TexCoords).r;

    vec3 norm = normalize(Normal);
    vec3 lightDir = normalize(pointLight.position - FragPos);
    vec3 viewDir = normalize(viewPosition - FragPos);
    vec3 halfway = normalize(lightDir + viewDir);

    float dist = length(pointLight.position - FragPos);
    float attenuation = 1.0 / (pointLight.constant
        + pointLight.linear * dist
        + pointLight.quadratic * dist * dist);

    vec3 ambient = pointLight.ambient * albedo;
    vec3 diffuse = pointLight.diffuse * max(dot(norm, lightDir), 0.0) * albedo;
    vec3 specular = pointLight.specular
        * pow(max(dot(norm, halfway), 0.0), 32.0) * specularMask;

    vec3 color = (ambient + diffuse + specular) * attenuation;

    if (spotLight.enabled) {
        vec3 spotDir = normalize(viewPosition - FragPos);
        float theta = dot(spotDir, normalize(-viewDirection));
        float epsilon = spotLight.cutOff - spotLight.outerCutOff;
        float intensity = clamp((theta - spotLight.outerCutOff) / epsilon, 0.0, 1.0);
        color += intensity * diffuse;
    }

    FragColor = vec4(color, 1.0);

    float brightness = dot(color, vec3(0.2126, 0.7152, 0.0722));
    if (brightness > brightThreshold) {
        BrightColor = vec4(color, 1.0);
    } else {
        BrightColor = vec4(0.0, 0.0, 0.0, 1.0);
    }
}
"#;

/// Shared vertex shader for the quad passes
pub const FULLSCREEN_VERT: &str = r#"
#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aTexCoords;

out vec2 TexCoords;

void main() {
    TexCoords = aTexCoords;
    gl_Position = vec4(aPos, 0.0, 1.0);
}
"#;

/// Single-direction 5-tap Gaussian blur; the axis flips per pass via the
/// `horizontal` flag.
pub const BLUR_FRAG: &str = r#"
#version 330 core
out vec4 FragColor;

in vec2 TexCoords;

uniform sampler2D sourceImage;
uniform bool horizontal;

const float weight[5] = float[] (0.227027, 0.1945946, 0.1216216, 0.054054, 0.016216);

void main() {
    vec2 texelSize = 1.0 / textureSize(sourceImage, 0);
    vec3 result = texture(sourceImage, TexCoords).rgb * weight[0];
    if (horizontal) {
        for (int i = 1; i < 5; ++i) {
            result += texture(sourceImage, TexCoords + vec2(texelSize.x * i, 0.0)).rgb * weight[i];
            result += texture(sourceImage, TexCoords - vec2(texelSize.x * i, 0.0)).rgb * weight[i];
        }
    } else {
        for (int i = 1; i < 5; ++i) {
            result += texture(sourceImage, TexCoords + vec2(0.0, texelSize.y * i)).rgb * weight[i];
            result += texture(sourceImage, TexCoords - vec2(0.0, texelSize.y * i)).rgb * weight[i];
        }
    }
    FragColor = vec4(result, 1.0);
}
"#;

/// Additive composite of the base image and the blurred highlights
pub const COMPOSITE_FRAG: &str = r#"
#version 330 core
out vec4 FragColor;

in vec2 TexCoords;

uniform sampler2D baseImage;
uniform sampler2D highlights;

void main() {
    vec3 base = texture(baseImage, TexCoords).rgb;
    vec3 bloom = texture(highlights, TexCoords).rgb;
    FragColor = vec4(base + bloom, 1.0);
}
"#;

/// Compile the scene program used by capture-stage drawables
pub fn create_scene_program(device: &mut dyn GraphicsDevice) -> Result<Arc<dyn Program>> {
    device.create_program(&ProgramDesc {
        vertex_source: SCENE_VERT.to_string(),
        fragment_source: SCENE_FRAG.to_string(),
        label: "scene".to_string(),
    })
}

/// Compile the ping-pong blur program
pub fn create_blur_program(device: &mut dyn GraphicsDevice) -> Result<Arc<dyn Program>> {
    device.create_program(&ProgramDesc {
        vertex_source: FULLSCREEN_VERT.to_string(),
        fragment_source: BLUR_FRAG.to_string(),
        label: "blur".to_string(),
    })
}

/// Compile the composite program
pub fn create_composite_program(device: &mut dyn GraphicsDevice) -> Result<Arc<dyn Program>> {
    device.create_program(&ProgramDesc {
        vertex_source: FULLSCREEN_VERT.to_string(),
        fragment_source: COMPOSITE_FRAG.to_string(),
        label: "composite".to_string(),
    })
}
