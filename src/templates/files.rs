//! `NestJS` source templates

/// `TypeORM` entity template
pub const ENTITY_TS: &str = r"import { Entity, Column, PrimaryGeneratedColumn, CreateDateColumn, UpdateDateColumn, DeleteDateColumn, ManyToOne } from 'typeorm';
import { User } from '../../users/entities/user.entity';

@Entity({ name: '{{feature_name}}s' })
export class {{class_name}} {
  @PrimaryGeneratedColumn()
  id: number;

  @Column()
  name: string;

  @Column({ nullable: true, type: 'text' })
  description: string;

  @ManyToOne(() => User, (user) => user.id)
  creator: User;

  @CreateDateColumn()
  createdAt: Date;

  @UpdateDateColumn()
  updatedAt: Date;

  @DeleteDateColumn()
  deletedAt: Date; // Soft Delete: Crucial for real-world projects
}
";

/// Create DTO template
pub const CREATE_DTO_TS: &str = r"import { IsNotEmpty, IsString, IsOptional, MaxLength } from 'class-validator';
import { ApiProperty } from '@nestjs/swagger';

export class Create{{class_name}}Dto {
  @ApiProperty({ description: 'Identifier name', example: 'Summer Vacation 2024' })
  @IsNotEmpty({ message: 'Name must not be empty' })
  @IsString()
  @MaxLength(255)
  name: string;

  @ApiProperty({ description: 'Detailed description', required: false })
  @IsOptional()
  @IsString()
  description?: string;
}
";

/// Update DTO template
pub const UPDATE_DTO_TS: &str = r"import { PartialType } from '@nestjs/swagger'; // Or @nestjs/mapped-types if Swagger is not used
import { Create{{class_name}}Dto } from './create-{{feature_name}}.dto';

export class Update{{class_name}}Dto extends PartialType(Create{{class_name}}Dto) {}
";

/// Service template with CRUD and soft delete
pub const SERVICE_TS: &str = r"import { Injectable, NotFoundException } from '@nestjs/common';
import { InjectRepository } from '@nestjs/typeorm';
import { Repository } from 'typeorm';
import { {{class_name}} } from './entities/{{feature_name}}.entity';
import { Create{{class_name}}Dto } from './dto/create-{{feature_name}}.dto';
import { Update{{class_name}}Dto } from './dto/update-{{feature_name}}.dto';
import { User } from '../../users/entities/user.entity';

@Injectable()
export class {{class_name}}Service {
  constructor(
    @InjectRepository({{class_name}})
    private readonly repository: Repository<{{class_name}}>,
  ) {}

  async create(createDto: Create{{class_name}}Dto, user: User): Promise<{{class_name}}> {
    const newItem = this.repository.create({
      ...createDto,
      creator: user,
    });
    return await this.repository.save(newItem);
  }

  async findAll(): Promise<{{class_name}}[]> {
    return await this.repository.find({
      order: { createdAt: 'DESC' },
    });
  }

  async findOne(id: number): Promise<{{class_name}}> {
    const item = await this.repository.findOne({ where: { id } });
    if (!item) throw new NotFoundException(`{{class_name}} with id ${id} not found`);
    return item;
  }

  async update(id: number, updateDto: Update{{class_name}}Dto): Promise<{{class_name}}> {
    const item = await this.findOne(id); // Check exist
    this.repository.merge(item, updateDto);
    return await this.repository.save(item);
  }

  async remove(id: number): Promise<void> {
    const result = await this.repository.softDelete(id); // Soft delete
    if (result.affected === 0) {
       throw new NotFoundException(`{{class_name}} with id ${id} not found to delete`);
    }
  }
}
";

/// REST controller template
pub const CONTROLLER_TS: &str = r"import { Controller, Get, Post, Body, Patch, Param, Delete, UseGuards, Req, ParseIntPipe } from '@nestjs/common';
import { {{class_name}}Service } from './{{feature_name}}.service';
import { Create{{class_name}}Dto } from './dto/create-{{feature_name}}.dto';
import { Update{{class_name}}Dto } from './dto/update-{{feature_name}}.dto';
import { ApiTags, ApiOperation, ApiBearerAuth } from '@nestjs/swagger';
// import { JwtAuthGuard } from '../../auth/guards/jwt-auth.guard'; 

@ApiTags('{{class_name}}')
@ApiBearerAuth()
@Controller('{{feature_name}}s') // Plural route
export class {{class_name}}Controller {
  constructor(private readonly service: {{class_name}}Service) {}

  // @UseGuards(JwtAuthGuard)
  @Post()
  @ApiOperation({ summary: 'Create new {{class_name}}' })
  create(@Body() createDto: Create{{class_name}}Dto, @Req() req) {
    // Assuming req.user exists after passing Guard
    return this.service.create(createDto, req.user);
  }

  @Get()
  @ApiOperation({ summary: 'Get list of {{class_name}}' })
  findAll() {
    return this.service.findAll();
  }

  @Get(':id')
  @ApiOperation({ summary: 'Get details of {{class_name}}' })
  findOne(@Param('id', ParseIntPipe) id: number) {
    return this.service.findOne(id);
  }

  // @UseGuards(JwtAuthGuard)
  @Patch(':id')
  @ApiOperation({ summary: 'Update {{class_name}}' })
  update(@Param('id', ParseIntPipe) id: number, @Body() updateDto: Update{{class_name}}Dto) {
    return this.service.update(id, updateDto);
  }

  // @UseGuards(JwtAuthGuard)
  @Delete(':id')
  @ApiOperation({ summary: 'Delete (Soft delete) {{class_name}}' })
  remove(@Param('id', ParseIntPipe) id: number) {
    return this.service.remove(id);
  }
}
";

/// `NestJS` module template
pub const MODULE_TS: &str = r"import { Module } from '@nestjs/common';
import { TypeOrmModule } from '@nestjs/typeorm';
import { {{class_name}}Service } from './{{feature_name}}.service';
import { {{class_name}}Controller } from './{{feature_name}}.controller';
import { {{class_name}} } from './entities/{{feature_name}}.entity';

@Module({
  imports: [TypeOrmModule.forFeature([{{class_name}}])],
  controllers: [{{class_name}}Controller],
  providers: [{{class_name}}Service],
  exports: [{{class_name}}Service], // Export for other modules to use
})
export class {{class_name}}Module {}
";

/// Jest spec stub for the service
pub const SERVICE_SPEC_TS: &str = r"import { Test, TestingModule } from '@nestjs/testing';
import { {{class_name}}Service } from './{{feature_name}}.service';
import { getRepositoryToken } from '@nestjs/typeorm';
import { {{class_name}} } from './entities/{{feature_name}}.entity';

describe('{{class_name}}Service', () => {
  let service: {{class_name}}Service;
  
  const mockRepository = {
    find: jest.fn(),
    findOne: jest.fn(),
    create: jest.fn(),
    save: jest.fn(),
  };

  beforeEach(async () => {
    const module: TestingModule = await Test.createTestingModule({
      providers: [
        {{class_name}}Service,
        {
          provide: getRepositoryToken({{class_name}}),
          useValue: mockRepository,
        },
      ],
    }).compile();

    service = module.get<{{class_name}}Service>({{class_name}}Service);
  });

  it('should be defined', () => {
    expect(service).toBeDefined();
  });
});
";

/// Jest spec stub for the controller
pub const CONTROLLER_SPEC_TS: &str = r"import { Test, TestingModule } from '@nestjs/testing';
import { {{class_name}}Controller } from './{{feature_name}}.controller';
import { {{class_name}}Service } from './{{feature_name}}.service';

describe('{{class_name}}Controller', () => {
  let controller: {{class_name}}Controller;

  const mockService = {
    create: jest.fn(),
    findAll: jest.fn(),
  };

  beforeEach(async () => {
    const module: TestingModule = await Test.createTestingModule({
      controllers: [{{class_name}}Controller],
      providers: [
        {
          provide: {{class_name}}Service,
          useValue: mockService,
        },
      ],
    }).compile();

    controller = module.get<{{class_name}}Controller>({{class_name}}Controller);
  });

  it('should be defined', () => {
    expect(controller).toBeDefined();
  });
});
";
